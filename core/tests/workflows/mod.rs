// SPDX-FileCopyrightText: 2025 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

mod conflicts;
mod day_status;
mod file_store;
mod next_class;
mod semester;
