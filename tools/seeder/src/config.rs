use anyhow::{Context, Result};

/// Seeder configuration loaded from environment variables.
#[derive(Debug)]
pub struct SeederConfig {
    /// Base URL of the Supabase project (e.g. "https://xyz.supabase.co").
    /// Env var: `SUPABASE_URL`.
    pub supabase_url: String,
    /// Service-role key with admin access to auth and every table.
    /// Env var: `SUPABASE_SERVICE_ROLE_KEY`.
    pub service_role_key: String,
}

impl SeederConfig {
    /// Read configuration after `dotenv`. Both variables are required;
    /// the caller aborts the process before any work when either is
    /// missing.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            supabase_url: std::env::var("SUPABASE_URL").context("SUPABASE_URL")?,
            service_role_key: std::env::var("SUPABASE_SERVICE_ROLE_KEY")
                .context("SUPABASE_SERVICE_ROLE_KEY")?,
        })
    }
}
