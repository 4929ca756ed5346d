// SPDX-FileCopyrightText: The tourmark authors
// SPDX-License-Identifier: MPL-2.0

//! Documentation and document layout

#![allow(rustdoc::invalid_rust_codeblocks)] // Do not interpret code blocks, e.g. Markdown samples.
#![doc = include_str!("../README.md")]
