// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

//! Tests for the `tick_source` crate as production code sees it, with the `test-util` feature disabled.
