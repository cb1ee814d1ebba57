//! Child-record synthesis: projects, awards, certifications and education
//! entries for every resolved identity.

use chrono::{Days, NaiveDate, Utc};
use rand::RngExt;
use tracing::warn;

use folio_domain::award::AwardRow;
use folio_domain::certification::CertificationRow;
use folio_domain::education::EducationRow;
use folio_domain::identity::IdentityMap;
use folio_domain::project::ProjectRow;

use crate::fixtures::{
    self, AWARDS_PER_USER, CERTIFICATIONS_PER_USER, PROJECTS_PER_USER, SeedUser,
};

/// Generated child rows, grouped per target table and ready for loading.
#[derive(Debug, Default)]
pub struct ChildRows {
    pub projects: Vec<ProjectRow>,
    pub awards: Vec<AwardRow>,
    pub certifications: Vec<CertificationRow>,
    pub educations: Vec<EducationRow>,
}

/// Synthesize the fixed per-user quota of child rows for every seed user
/// with a resolved identity. Unresolved users are skipped entirely so no
/// orphan rows reference a missing account. Row contents are random but
/// schema-valid; `author` carries the directory display name, falling
/// back to the generated one.
pub fn generate<R: RngExt>(rng: &mut R, seeds: &[SeedUser], identities: &IdentityMap) -> ChildRows {
    let mut rows = ChildRows::default();

    for seed in seeds {
        let Some(identity) = identities.get(&seed.email) else {
            warn!(email = %seed.email, "no resolved identity, skipping child records");
            continue;
        };
        let author = identity.name.clone().unwrap_or_else(|| seed.name.clone());

        for i in 1..=PROJECTS_PER_USER {
            let start_year = rng.random_range(2021..=2024);
            let end_year = start_year + rng.random_range(0..=1);
            rows.projects.push(ProjectRow {
                user_id: identity.id,
                title: format!("프로젝트 {i}"),
                role: Some(fixtures::pick(rng, fixtures::PROJECT_ROLES).to_owned()),
                description: Some(format!("목업 프로젝트 설명 {i}")),
                start_date: Some(month_start(start_year, rng.random_range(1..=12))),
                end_date: Some(month_start(end_year, rng.random_range(1..=12))),
                author: Some(author.clone()),
            });
        }

        for i in 1..=AWARDS_PER_USER {
            rows.awards.push(AwardRow {
                user_id: identity.id,
                title: format!("수상 {i}"),
                info: Some(format!("수상 설명 {i}")),
                issuer: Some(fixtures::pick(rng, fixtures::AWARD_ISSUERS).to_owned()),
                date: date_within(rng, 6),
                author: Some(author.clone()),
            });
        }

        for _ in 0..CERTIFICATIONS_PER_USER {
            rows.certifications.push(CertificationRow {
                user_id: identity.id,
                title: fixtures::pick(rng, fixtures::CERT_NAMES).to_owned(),
                license: rng.random_range(10_000..=99_999),
                issued_date: date_within(rng, 8),
                issuer: fixtures::pick(rng, fixtures::CERT_ISSUERS).to_owned(),
                langscore: if rng.random_range(0..3) == 0 {
                    Some(rng.random_range(800..=949))
                } else {
                    None
                },
                author: Some(author.clone()),
            });
        }

        // Four-year course: admission on March 1, graduation on Feb 20.
        let admission_year = rng.random_range(2015..=2022);
        rows.educations.push(EducationRow {
            user_id: identity.id,
            title: fixtures::pick(rng, fixtures::UNIVERSITIES).to_owned(),
            major: fixtures::pick(rng, fixtures::MAJORS).to_owned(),
            grades: rng.random_range(3..=4),
            start_date: ymd(admission_year, 3, 1),
            end_date: ymd(admission_year + 4, 2, 20),
            author: Some(author),
        });
    }

    rows
}

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid calendar date")
}

fn month_start(year: i32, month: u32) -> NaiveDate {
    ymd(year, month, 1)
}

/// Uniformly random date within the last `years_back` years.
fn date_within<R: RngExt>(rng: &mut R, years_back: u64) -> NaiveDate {
    let today = Utc::now().date_naive();
    today - Days::new(rng.random_range(0..=years_back * 365))
}
