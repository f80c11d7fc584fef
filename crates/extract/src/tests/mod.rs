// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


pub const SAMPLE_CSV: &str = "Invoice ID,Branch,City\n750-67-8428,A,Yangon\n";
