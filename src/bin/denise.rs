// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fs::File;
use std::io::BufWriter;

use clap::{Parser, ValueEnum};
use log::{error, info};

use denise::core::bitmap::resolve;
use denise::core::copper::{decode_copper, screen_from_copper};
use denise::core::error::{Result, ViewerError};
use denise::core::palette::Palette;
use denise::core::raster::decode_raster;
use denise::core::resource::GfxResource;
use denise::core::session::Session;
use denise::frontend;

/// Where the palette for rendering comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum PaletteSource {
    /// COLORxx writes in the decoded Copper list
    Copper,
    /// The custom register snapshot
    Registers,
    /// A palette resource from the catalog (needs --palette-resource)
    Resource,
}

/// Amiga chipset graphics inspector
#[derive(Parser)]
#[command(name = "denise")]
#[command(about = "Decode bitmaps, palettes and the Copper list from a frame snapshot", long_about = None)]
struct Args {
    /// Path to the frame snapshot manifest (JSON)
    session: String,

    /// Bitmap resource to decode; the Copper screen when omitted
    #[arg(short, long)]
    bitmap: Option<String>,

    /// Palette source for rendering
    #[arg(short, long, value_enum, default_value = "copper")]
    palette: PaletteSource,

    /// Palette resource name (with --palette resource)
    #[arg(long)]
    palette_resource: Option<String>,

    /// Write the decoded raster to this PPM file
    #[arg(short, long)]
    output: Option<String>,

    /// Print the Copper disassembly
    #[arg(long)]
    disassemble: bool,

    /// List the session's graphics resources
    #[arg(long)]
    list: bool,
}

fn main() -> Result<()> {
    // Initialize logger with default level INFO
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("denise v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    let session = match Session::load(&args.session) {
        Ok(session) => session,
        Err(e) => {
            error!("Failed to load session: {}", e);
            return Err(e);
        }
    };

    let copper = decode_copper(&session.memory, &session.dma_events);
    info!(
        "Copper list: {} instructions{}",
        copper.len(),
        if copper.truncated { " (truncated)" } else { "" }
    );

    if args.list {
        for resource in &session.resources {
            match resource {
                GfxResource::Bitmap {
                    name,
                    address,
                    width,
                    height,
                    num_planes,
                    interleaved,
                    masked,
                    ..
                } => println!(
                    "bitmap  {:<24} ${:08X} {}x{}x{} {}{}",
                    name,
                    address,
                    width,
                    height,
                    num_planes,
                    if *interleaved { "I" } else { "" },
                    if *masked { "M" } else { "" }
                ),
                GfxResource::Palette {
                    name,
                    address,
                    num_entries,
                } => println!(
                    "palette {:<24} ${:08X} {} entries",
                    name, address, num_entries
                ),
            }
        }
    }

    if args.disassemble {
        print!("{}", copper.disassembly());
    }

    let palette = match args.palette {
        PaletteSource::Copper => Palette::from_copper(&copper),
        PaletteSource::Registers => Palette::from_custom_regs(&session.custom_regs),
        PaletteSource::Resource => {
            let name = args.palette_resource.as_deref().ok_or_else(|| {
                ViewerError::Session("--palette resource needs --palette-resource".into())
            })?;
            match session.find_resource(name)? {
                GfxResource::Palette {
                    address,
                    num_entries,
                    ..
                } => Palette::from_memory(&session.memory, *address, *num_entries),
                GfxResource::Bitmap { .. } => {
                    return Err(ViewerError::Session(format!(
                        "resource '{}' is a bitmap, not a palette",
                        name
                    )));
                }
            }
        }
    };

    let (screen, mask) = match &args.bitmap {
        Some(name) => {
            let resource = session.find_resource(name)?;
            let desc = resource.descriptor().ok_or_else(|| {
                ViewerError::Session(format!("resource '{}' is not a bitmap", name))
            })?;
            let bitmap = resolve(&desc)?;
            (bitmap.screen, bitmap.mask)
        }
        None => (screen_from_copper(&copper), None),
    };

    info!(
        "Screen: {}x{}, {} planes, modulos [{}, {}]",
        screen.width,
        screen.height,
        screen.planes.len(),
        screen.modulos[0],
        screen.modulos[1]
    );

    let raster = decode_raster(&session.memory, &screen, mask.as_ref(), &palette);

    if let Some(path) = &args.output {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        frontend::write_ppm(&mut writer, &raster)?;
        info!("Wrote {}x{} raster to {}", raster.width(), raster.height(), path);
    }

    Ok(())
}
