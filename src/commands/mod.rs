// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod transactions;
pub mod expenses;
pub mod investments;
pub mod pac_plans;
pub mod budgets;
pub mod summary;
pub mod exporter;
