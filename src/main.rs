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

mod settings;

use std::env;
use tracing_subscriber;
use tracing_appender;
use tracing::{error, info};

use utils::numeric::round_float_to;
use crate::settings::GearSettings;


fn main() -> Result<(), Box<dyn std::error::Error>> {
    match env::current_dir() {
        Ok(current_dir) => {
            let file_appender = tracing_appender::rolling::never(current_dir, "gear_inches.log");
            let subscriber = tracing_subscriber::fmt()
                .with_writer(file_appender)
                .with_ansi(false)
                .compact()
                .finish();
            match tracing::subscriber::set_global_default(subscriber) {
                Ok(_) => {
                    info!("Logging initialised");
                }
                Err(e) => {
                    eprintln!("Failed to init logging. {}", e.to_string());
                }
            }
        }
        Err(e) => {
            eprintln!("Failed to init logging. Couldn't determine current dir {}", e.to_string());
        }
    }

    let settings = GearSettings::load()?;
    info!("Calculating for cog {} chainring {} rim {} tire {}",
          settings.cog(), settings.chainring(), settings.rim(), settings.tire());

    let wheel = settings.wheel();
    let gear = settings.gear(&wheel);
    let inches = gear.gear_inches().map_err(|e| {
        error!("Gear inch calculation failed. {}", e.to_string());
        e
    })?;
    info!("Wheel diameter {}, circumference {}, gear inches {}",
          wheel.diameter(), round_float_to(wheel.circumference(), 2), round_float_to(inches, 2));
    println!("{}", result_line(inches));
    Ok(())
}

fn result_line(inches: f64) -> String {
    format!("{}", inches)
}
