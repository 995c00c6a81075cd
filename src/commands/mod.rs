// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod compute;
pub mod generate;
pub mod importer;
pub mod rates;
pub mod serve;
