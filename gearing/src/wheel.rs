/*
 * Copyright (c):
 * 2026 zephyrj
 * zephyrj@protonmail.com
 *
 * This file is part of gear-inches.
 *
 * gear-inches is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * gear-inches is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with gear-inches. If not, see <https://www.gnu.org/licenses/>.
 */

use crate::traits::Diameter;

/// A wheel described by its rim and tire sizes. The values are stored
/// exactly as given; zero and negative sizes are not rejected.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Wheel {
    rim: i32,
    tire: i32
}

impl Wheel {
    pub fn new(rim: i32, tire: i32) -> Wheel {
        Wheel { rim, tire }
    }

    pub fn rim(&self) -> i32 {
        self.rim
    }

    pub fn tire(&self) -> i32 {
        self.tire
    }

    /// Rim plus the tire on both sides.
    pub fn diameter(&self) -> f64 {
        self.rim as f64 + 2.0 * self.tire as f64
    }

    /// Only the rim contributes here; the tire is deliberately left out.
    pub fn circumference(&self) -> f64 {
        self.rim as f64 * std::f64::consts::PI
    }
}

impl Diameter for Wheel {
    fn diameter(&self) -> f64 {
        Wheel::diameter(self)
    }
}
