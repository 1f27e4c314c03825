// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod setup;
pub mod income;
pub mod expenses;
pub mod owing;
pub mod upcoming;
pub mod goals;
pub mod history;
pub mod dashboard;
pub mod reports;
pub mod chat;
pub mod theme;
