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

use tracing::{debug, warn};
use crate::error::{Error, Result};
use crate::traits::Diameter;
use crate::wheel::Wheel;

fn ratio(cog: i32, chainring: i32) -> Result<f64> {
    if chainring == 0 {
        warn!("Refusing to calculate ratio for cog {} with a zero tooth chainring", cog);
        return Err(Error::ZeroChainring { cog });
    }
    Ok(cog as f64 / chainring as f64)
}

/// A cog and chainring pairing driving anything that has a diameter.
///
/// The wheel is handed in by the caller, so a `Gear<&Wheel>` can share a
/// wheel with other gears and tests can drive a gear with a stand-in
/// [`Diameter`] implementation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gear<D: Diameter> {
    cog: i32,
    chainring: i32,
    wheel: D
}

impl<D: Diameter> Gear<D> {
    pub fn new(cog: i32, chainring: i32, wheel: D) -> Gear<D> {
        Gear { cog, chainring, wheel }
    }

    pub fn cog(&self) -> i32 {
        self.cog
    }

    pub fn chainring(&self) -> i32 {
        self.chainring
    }

    pub fn wheel(&self) -> &D {
        &self.wheel
    }

    /// `cog / chainring`. Fails with [`Error::ZeroChainring`] when the
    /// chainring has no teeth.
    pub fn ratio(&self) -> Result<f64> {
        ratio(self.cog, self.chainring)
    }

    pub fn gear_inches(&self) -> Result<f64> {
        Ok(self.ratio()? * self.wheel.diameter())
    }
}

impl Gear<Wheel> {
    /// Build the wheel from its rim and tire sizes and keep hold of it.
    pub fn from_wheel_dimensions(cog: i32, chainring: i32, rim: i32, tire: i32) -> Gear<Wheel> {
        Gear::new(cog, chainring, Wheel::new(rim, tire))
    }
}

/// A gear that carries the wheel dimensions itself and builds a [`Wheel`]
/// every time gear inches are requested. Results match [`Gear`] for the
/// same inputs; prefer [`Gear`] as nothing can be substituted for the wheel
/// here.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct CoupledGear {
    cog: i32,
    chainring: i32,
    rim: i32,
    tire: i32
}

impl CoupledGear {
    pub fn new(cog: i32, chainring: i32, rim: i32, tire: i32) -> CoupledGear {
        CoupledGear { cog, chainring, rim, tire }
    }

    pub fn ratio(&self) -> Result<f64> {
        ratio(self.cog, self.chainring)
    }

    pub fn gear_inches(&self) -> Result<f64> {
        let wheel = Wheel::new(self.rim, self.tire);
        debug!("Built wheel {:?} for cog {} chainring {}", wheel, self.cog, self.chainring);
        Ok(self.ratio()? * wheel.diameter())
    }
}

#[cfg(test)]
mod tests {
    use utils::numeric::approx_eq;
    use crate::error::Error;
    use crate::gear::{CoupledGear, Gear};
    use crate::traits::Diameter;
    use crate::wheel::Wheel;

    struct FixedDiameter(f64);

    impl Diameter for FixedDiameter {
        fn diameter(&self) -> f64 {
            self.0
        }
    }

    #[test]
    fn ratio_tests() {
        let wheel = Wheel::new(32, 23);
        assert_eq!(Gear::new(1, 1, wheel).ratio(), Ok(1.0));
        assert_eq!(Gear::new(52, 23, wheel).ratio(), Ok(52.0 / 23.0));
        assert_eq!(Gear::new(11, 44, wheel).ratio(), Ok(0.25));
        assert_eq!(Gear::new(0, 44, wheel).ratio(), Ok(0.0));
        assert!(approx_eq(Gear::new(52, 23, wheel).ratio().unwrap(), 2.2608695652, 1e-10));
    }

    #[test]
    fn unit_gear_on_small_wheel() {
        let wheel = Wheel::new(3, 1);
        assert_eq!(wheel.diameter(), 5.0);
        let gear = Gear::new(1, 1, &wheel);
        assert_eq!(gear.ratio(), Ok(1.0));
        assert_eq!(gear.gear_inches(), Ok(5.0));
    }

    #[test]
    fn road_gear() {
        let wheel = Wheel::new(32, 23);
        assert_eq!(wheel.diameter(), 78.0);
        let gear_inches = Gear::new(52, 23, &wheel).gear_inches().unwrap();
        assert!(approx_eq(gear_inches, 176.34782608695653, 1e-9));
    }

    #[test]
    fn construction_forms_agree() {
        for (cog, chainring, rim, tire) in [(1, 1, 3, 1), (52, 23, 32, 23), (11, 53, 622, 25), (-3, 7, 0, -2)] {
            let wheel = Wheel::new(rim, tire);
            let expected = Gear::from_wheel_dimensions(cog, chainring, rim, tire).gear_inches();
            assert_eq!(Gear::new(cog, chainring, wheel).gear_inches(), expected);
            assert_eq!(Gear::new(cog, chainring, &wheel).gear_inches(), expected);
            assert_eq!(CoupledGear::new(cog, chainring, rim, tire).gear_inches(), expected);
        }
    }

    #[test]
    fn zero_chainring_is_an_error() {
        let expected = Err(Error::ZeroChainring { cog: 52 });
        let wheel = Wheel::new(32, 23);
        assert_eq!(Gear::new(52, 0, wheel).ratio(), expected);
        assert_eq!(Gear::new(52, 0, &wheel).gear_inches(), expected);
        assert_eq!(Gear::from_wheel_dimensions(52, 0, 32, 23).gear_inches(), expected);
        assert_eq!(CoupledGear::new(52, 0, 32, 23).ratio(), expected);
        assert_eq!(CoupledGear::new(52, 0, 32, 23).gear_inches(), expected);
    }

    #[test]
    fn injected_diameter() {
        let gear = Gear::new(10, 5, FixedDiameter(27.0));
        assert_eq!(gear.gear_inches(), Ok(54.0));
        assert_eq!(gear.wheel().diameter(), 27.0);

        let fixed = FixedDiameter(700.0);
        let dyn_gear: Gear<&dyn Diameter> = Gear::new(1, 2, &fixed);
        assert_eq!(dyn_gear.gear_inches(), Ok(350.0));
    }

    #[test]
    fn gears_share_a_wheel() {
        let wheel = Wheel::new(32, 23);
        let big = Gear::new(52, 23, &wheel);
        let small = Gear::new(23, 23, &wheel);
        assert_eq!(small.gear_inches(), Ok(78.0));
        assert!(big.gear_inches().unwrap() > small.gear_inches().unwrap());
        assert_eq!(big.wheel(), &&wheel);
    }

    #[test]
    fn accessors() {
        let gear = Gear::from_wheel_dimensions(52, 23, 32, 23);
        assert_eq!(gear.cog(), 52);
        assert_eq!(gear.chainring(), 23);
        assert_eq!(gear.wheel(), &Wheel::new(32, 23));
    }
}
