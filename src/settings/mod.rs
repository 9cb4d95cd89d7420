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

use config::{Config, ConfigBuilder, ConfigError, Source};
use config::builder::DefaultState;
use serde::Deserialize;
use tracing::warn;
use gearing::{Gear, Wheel};

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct GearSettings {
    cog: i32,
    chainring: i32,
    rim: i32,
    tire: i32
}

impl GearSettings {
    const COG: &'static str = "cog";
    const CHAINRING: &'static str = "chainring";
    const RIM: &'static str = "rim";
    const TIRE: &'static str = "tire";
    const CONFIG_FILENAME: &'static str = "gear-inches-conf";

    const DEFAULT_COG: i32 = 52;
    const DEFAULT_CHAINRING: i32 = 23;
    const DEFAULT_RIM: i32 = 32;
    const DEFAULT_TIRE: i32 = 23;

    pub fn default() -> Self {
        GearSettings {
            cog: GearSettings::DEFAULT_COG,
            chainring: GearSettings::DEFAULT_CHAINRING,
            rim: GearSettings::DEFAULT_RIM,
            tire: GearSettings::DEFAULT_TIRE
        }
    }

    pub fn load() -> Result<Self, ConfigError> {
        GearSettings::load_from(config::File::with_name(GearSettings::CONFIG_FILENAME).required(false))
    }

    fn load_from<T>(source: T) -> Result<Self, ConfigError>
        where T: Source + Send + Sync + 'static
    {
        let loaded = GearSettings::builder_with_defaults()?
            .add_source(source)
            .build()
            .and_then(|settings| settings.try_deserialize());
        return match loaded {
            Ok(settings) => {
                Ok(settings)
            }
            Err(e) => {
                warn!("Failed to load settings; using defaults. {}", e.to_string());
                Ok(GearSettings::default())
            }
        }
    }

    fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default(GearSettings::COG, GearSettings::DEFAULT_COG as i64)?
            .set_default(GearSettings::CHAINRING, GearSettings::DEFAULT_CHAINRING as i64)?
            .set_default(GearSettings::RIM, GearSettings::DEFAULT_RIM as i64)?
            .set_default(GearSettings::TIRE, GearSettings::DEFAULT_TIRE as i64)
    }

    pub fn cog(&self) -> i32 {
        self.cog
    }

    pub fn chainring(&self) -> i32 {
        self.chainring
    }

    pub fn rim(&self) -> i32 {
        self.rim
    }

    pub fn tire(&self) -> i32 {
        self.tire
    }

    pub fn wheel(&self) -> Wheel {
        Wheel::new(self.rim, self.tire)
    }

    pub fn gear<'a>(&self, wheel: &'a Wheel) -> Gear<&'a Wheel> {
        Gear::new(self.cog, self.chainring, wheel)
    }
}
