//! Command-line driver for nanoprism wavelength sweeps.
//!
//! ```sh
//! nanoprism-sweep run job.toml
//! nanoprism-sweep run --material gold --host-permittivity 1.77
//! nanoprism-sweep validate job.toml
//! nanoprism-sweep materials
//! ```

mod config;
mod writer;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use nanoprism::spectrum::wavelengths_outside_table;
use nanoprism::{Metal, RangePolicy, compute_spectrum, photon_energy};

use config::JobConfig;

#[derive(Parser)]
#[command(name = "nanoprism-sweep")]
#[command(about = "Dipole optical response of triangular silver and gold nanoprisms")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sweep the wavelength range and write the spectra.
    Run {
        /// TOML job file. Without one the reference silver prism is used.
        config: Option<PathBuf>,
        #[command(flatten)]
        overrides: Overrides,
    },
    /// Check a job file without running it.
    Validate {
        config: PathBuf,
    },
    /// List the embedded optical constant tables.
    Materials,
}

/// Command-line values that take precedence over the job file.
#[derive(Args, Debug, Default)]
struct Overrides {
    /// silver, ag, gold or au
    #[arg(short, long)]
    material: Option<String>,
    /// Triangle edge length L (nm)
    #[arg(long)]
    edge_length: Option<f64>,
    /// Prism thickness H (nm)
    #[arg(long)]
    thickness: Option<f64>,
    /// Corner rounding radius R (nm)
    #[arg(long)]
    corner_radius: Option<f64>,
    /// Host permittivity
    #[arg(long)]
    host_permittivity: Option<f64>,
    #[arg(long)]
    wavelength_min: Option<f64>,
    #[arg(long)]
    wavelength_max: Option<f64>,
    #[arg(long)]
    wavelength_step: Option<f64>,
    /// Fail on wavelengths outside the optical table instead of extrapolating
    #[arg(long)]
    strict_range: bool,
    /// Output directory
    #[arg(short, long)]
    output: Option<PathBuf>,
    /// Output file prefix
    #[arg(long)]
    prefix: Option<String>,
    /// Also write <prefix>-spectrum.json
    #[arg(long)]
    json: bool,
}

impl Overrides {
    fn apply(self, job: &mut JobConfig) {
        if let Some(material) = self.material {
            job.particle.material = material;
        }
        if let Some(l) = self.edge_length {
            job.particle.edge_length = l;
        }
        if let Some(h) = self.thickness {
            job.particle.thickness = h;
        }
        if let Some(r) = self.corner_radius {
            job.particle.corner_radius = r;
        }
        if let Some(eps_h) = self.host_permittivity {
            job.host.permittivity = eps_h;
        }
        if let Some(min) = self.wavelength_min {
            job.wavelengths.min = min;
        }
        if let Some(max) = self.wavelength_max {
            job.wavelengths.max = max;
        }
        if let Some(step) = self.wavelength_step {
            job.wavelengths.step = step;
        }
        if self.strict_range {
            job.wavelengths.range_policy = RangePolicy::Reject;
        }
        if let Some(dir) = self.output {
            job.output.directory = dir;
        }
        if let Some(prefix) = self.prefix {
            job.output.prefix = prefix;
        }
        job.output.save_json |= self.json;
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run { config, overrides } => {
            let mut job = match &config {
                Some(path) => config::load_config(path)?,
                None => JobConfig::default(),
            };
            overrides.apply(&mut job);
            run(&job)
        }
        Commands::Validate { config } => {
            let job = config::load_config(&config)?;
            validate(&job).with_context(|| format!("invalid job file {}", config.display()))?;
            println!("Configuration is valid: {}", config.display());
            Ok(())
        }
        Commands::Materials => {
            list_materials();
            Ok(())
        }
    }
}

fn run(job: &JobConfig) -> anyhow::Result<()> {
    let params = job.to_sweep_params()?;
    let spectrum = compute_spectrum(&params)?;
    println!(
        "Effective size to calculate size-dependent dielectric function = {:.4} nm",
        spectrum.effective_diameter
    );

    let out = &job.output;
    for path in writer::write_dat_files(&spectrum, &out.directory, &out.prefix)? {
        log::info!("wrote {}", path.display());
    }
    if out.save_json {
        let path = writer::write_spectrum_json(&spectrum, &out.directory, &out.prefix)?;
        log::info!("wrote {}", path.display());
    }

    if let Some(peak) = spectrum.peak_extinction() {
        println!(
            "Extinction maximum {:.4e} cm^2 at {} nm",
            peak.extinction, peak.wavelength
        );
    }
    println!(
        "{} points written to {}",
        spectrum.points.len(),
        out.directory.display()
    );
    Ok(())
}

fn validate(job: &JobConfig) -> anyhow::Result<()> {
    let params = job.to_sweep_params()?;
    let outside = wavelengths_outside_table(params.metal.table(), &params.wavelengths()?);
    if outside > 0 {
        match params.range_policy {
            RangePolicy::Reject => anyhow::bail!(
                "{outside} wavelengths fall outside the {} table",
                params.metal
            ),
            RangePolicy::Extrapolate => log::warn!(
                "{outside} wavelengths fall outside the {} table and will be extrapolated",
                params.metal
            ),
        }
    }
    Ok(())
}

fn list_materials() {
    println!("Available materials:");
    for metal in Metal::ALL {
        let table = metal.table();
        let (e_min, e_max) = table.energy_range();
        println!(
            "  {:<7}({})  {}, {} points, {:.4}-{:.4} eV ({:.1}-{:.1} nm)",
            metal.to_string(),
            metal.symbol(),
            table.name(),
            table.len(),
            e_min,
            e_max,
            // hc/E also maps eV to nm
            photon_energy(e_max),
            photon_energy(e_min),
        );
    }
}
