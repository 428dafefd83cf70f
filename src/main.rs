//! FastUpd CLI entry point
//!
//! Calls UPD regions from germline exome/WGS trio VCFs.

use anyhow::Context;
use clap::{Parser, Subcommand};
use fast_upd::bed::{self, RegionFilter};
use fast_upd::core::RegionCaller;
use fast_upd::pipeline::{validate_af_tag, InformativeSites, SiteOptions, TrioIndices};
use fast_upd::vcf::VcfReader;
use log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "fast-upd")]
#[command(about = "Call UPD regions from germline exome/WGS trio VCFs")]
#[command(version)]
#[command(author = "FastUpd Contributors")]
struct Cli {
    /// Input VCF file (.vcf, .vcf.gz)
    #[arg(long, global = true)]
    vcf: Option<PathBuf>,

    /// ID of proband in VCF
    #[arg(long, global = true)]
    proband: Option<String>,

    /// ID of mother in VCF
    #[arg(long, global = true)]
    mother: Option<String>,

    /// ID of father in VCF
    #[arg(long, global = true)]
    father: Option<String>,

    /// Which field to use for population frequency filtering
    #[arg(long = "af-tag", global = true, default_value = "MAX_AF")]
    af_tag: String,

    /// Look up the AF tag in the VEP CSQ annotation
    #[arg(long, global = true)]
    vep: bool,

    /// Minimum SNP frequency
    #[arg(long = "min-af", global = true, default_value = "0.05")]
    min_af: f64,

    /// Minimum GQ score
    #[arg(long = "min-gq", global = true, default_value = "30")]
    min_gq: i32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Call UPD regions
    Regions {
        /// Minimum UPD informative sites required to call a region
        #[arg(long = "min-sites", default_value = "3")]
        min_sites: u64,
        /// Minimum size (bp) required to call a region
        #[arg(long = "min-size", default_value = "1000")]
        min_size: u64,
        /// Output BED file (stdout if not specified)
        #[arg(short = 'o', long)]
        out: Option<PathBuf>,
    },
    /// Print the sites that are informative for UPD
    Sites {
        /// Output BED file (stdout if not specified)
        #[arg(short = 'o', long)]
        out: Option<PathBuf>,
    },
}

/// Open the output target: a file, or stdout when none is given
fn open_output(out: Option<&PathBuf>) -> anyhow::Result<Box<dyn Write>> {
    match out {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file {:?}", path))?;
            Ok(Box::new(BufWriter::with_capacity(64 * 1024, file)))
        }
        None => Ok(Box::new(BufWriter::new(io::stdout()))),
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let start = Instant::now();

    let vcf_path = cli.vcf.context("--vcf is required")?;
    let proband = cli.proband.context("--proband is required")?;
    let mother = cli.mother.context("--mother is required")?;
    let father = cli.father.context("--father is required")?;

    info!("Running fast-upd on {:?}", vcf_path);
    let vcf = VcfReader::open(&vcf_path)?;

    // Resolve trio columns and the AF source before reading any variant
    let trio = TrioIndices::resolve(vcf.header(), &proband, &mother, &father)?;
    let csq_fields = if cli.vep {
        let fields = vcf.header().csq_fields()?;
        info!("CSQ fields: {}", fields.join("|"));
        Some(fields)
    } else {
        None
    };
    validate_af_tag(vcf.header(), csq_fields.as_deref(), &cli.af_tag)?;

    let opts = SiteOptions {
        af_tag: cli.af_tag.clone(),
        min_af: cli.min_af,
        min_gq: cli.min_gq,
    };
    let sites = InformativeSites::new(vcf, csq_fields, trio, opts);

    match cli.command {
        Commands::Regions {
            min_sites,
            min_size,
            out,
        } => {
            let filter = RegionFilter {
                min_sites,
                min_size,
            };
            let mut writer = open_output(out.as_ref())?;
            let mut caller = RegionCaller::new();
            let mut total_sites = 0u64;
            let mut total_regions = 0u64;
            let mut kept_regions = 0u64;

            for site in sites {
                let site = site?;
                total_sites += 1;
                if let Some(region) = caller.push(&site) {
                    total_regions += 1;
                    if filter.keep(&region) {
                        kept_regions += 1;
                        writeln!(writer, "{}", bed::format_region(&region))?;
                    }
                }
            }
            if let Some(region) = caller.finish() {
                total_regions += 1;
                if filter.keep(&region) {
                    kept_regions += 1;
                    writeln!(writer, "{}", bed::format_region(&region))?;
                }
            }
            writer.flush()?;

            eprintln!("\n=== UPD Calling Statistics ===");
            eprintln!("Informative sites: {}", total_sites);
            eprintln!("Putative regions:  {}", total_regions);
            eprintln!("Reported regions:  {}", kept_regions);
            eprintln!("Time elapsed:      {:.2}s", start.elapsed().as_secs_f64());
        }

        Commands::Sites { out } => {
            let mut writer = open_output(out.as_ref())?;
            let mut total_sites = 0u64;

            for site in sites {
                let site = site?;
                total_sites += 1;
                writeln!(writer, "{}", bed::format_site(&site))?;
            }
            writer.flush()?;

            eprintln!("\n=== UPD Calling Statistics ===");
            eprintln!("Informative sites: {}", total_sites);
            eprintln!("Time elapsed:      {:.2}s", start.elapsed().as_secs_f64());
        }
    }

    Ok(())
}
