//! folio-seeder — provisions synthetic accounts and portfolio data in a
//! Supabase project.
//!
//! # Usage
//!
//! ```bash
//! # Seed the default 80 users
//! SUPABASE_URL=https://xyz.supabase.co \
//! SUPABASE_SERVICE_ROLE_KEY=... \
//! cargo run -p folio-seeder
//!
//! # Smaller, reproducible fixture set
//! cargo run -p folio-seeder -- --users 20 --rng-seed 7
//! ```
//!
//! Exits 0 on completion; exits 1 when configuration is missing or when
//! identity resolution fails after its retry. Meant for fresh-environment
//! bootstrap: profiles are upserted, but child records append on every
//! run.

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::{StdRng, SysRng};
use tracing::{error, info};

use folio_core::tracing::init_tracing;
use folio_seeder::config::SeederConfig;
use folio_seeder::fixtures::{self, TOTAL_USERS};
use folio_seeder::infra::supabase::SupabaseClient;

#[derive(Parser)]
#[command(about = "Seed synthetic portfolio users and records into Supabase")]
struct Args {
    /// How many synthetic users to seed
    #[arg(long, default_value_t = TOTAL_USERS)]
    users: usize,

    /// Fixed RNG seed for reproducible fixture contents
    #[arg(long)]
    rng_seed: Option<u64>,
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    init_tracing();

    let args = Args::parse();

    let config = match SeederConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(error = %err, "missing configuration");
            std::process::exit(1);
        }
    };

    let client = SupabaseClient::new(&config.supabase_url, &config.service_role_key);
    let mut rng = match args.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::try_from_rng(&mut SysRng).unwrap(),
    };
    let seeds = fixtures::seed_users(&mut rng, args.users);

    match folio_seeder::run(&client, &seeds, &mut rng).await {
        Ok(summary) => info!(
            users = seeds.len(),
            resolved = summary.resolved,
            projects = summary.projects,
            awards = summary.awards,
            certifications = summary.certifications,
            educations = summary.educations,
            "seed completed"
        ),
        Err(err) => {
            error!(kind = err.kind(), error = %err, "seed aborted");
            std::process::exit(1);
        }
    }
}
