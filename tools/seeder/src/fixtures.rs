//! Fixture knobs and synthetic seed-user generation.
//!
//! All randomness flows through an injected RNG so a fixed `--rng-seed`
//! reproduces the exact same fixture set.

use rand::RngExt;

/// How many synthetic accounts one run provisions.
pub const TOTAL_USERS: usize = 80;
/// Shared credential every synthetic account ends up with, so test logins
/// work the same regardless of whether the account pre-existed.
pub const SHARED_PASSWORD: &str = "1234!@#$f";

pub const PROJECTS_PER_USER: usize = 3;
pub const AWARDS_PER_USER: usize = 2;
pub const CERTIFICATIONS_PER_USER: usize = 3;

/// Rows per insert request when loading child records.
pub const BATCH_SIZE: usize = 200;
/// Directory page size when resolving identities.
pub const DIRECTORY_PAGE_SIZE: u32 = 1000;

pub const PROFILE_DESCRIPTION: &str = "목업 사용자입니다.";

pub const STACKS: &[&str] = &[
    "React",
    "TypeScript",
    "JavaScript",
    "Node.js",
    "NestJS",
    "PostgreSQL",
    "Redux",
    "Zustand",
    "Next.js",
    "Tailwind",
    "Sass",
    "GraphQL",
    "Prisma",
];

pub const PROJECT_ROLES: &[&str] = &["FE", "BE", "Fullstack", "Mobile", "Data"];

pub const AWARD_ISSUERS: &[&str] = &[
    "한국개발상",
    "대한소프트대상",
    "서울IT어워드",
    "Korea Dev Prize",
    "OpenTech",
];

pub const CERT_NAMES: &[&str] = &[
    "정보처리기사",
    "SQLD",
    "네트워크관리사",
    "리눅스마스터",
    "ADsP",
];

pub const CERT_ISSUERS: &[&str] = &["큐넷", "KPC", "정보통신진흥협회", "과기정통부"];

pub const UNIVERSITIES: &[&str] = &[
    "서울대학교",
    "연세대학교",
    "고려대학교",
    "한양대학교",
    "성균관대학교",
    "서강대학교",
    "중앙대학교",
    "경희대학교",
    "한국외국어대학교",
    "서울시립대학교",
    "건국대학교",
    "국민대학교",
    "동국대학교",
    "이화여자대학교",
    "세종대학교",
    "홍익대학교",
    "서울과학기술대학교",
];

pub const MAJORS: &[&str] = &[
    "컴퓨터공학",
    "소프트웨어",
    "정보보호",
    "데이터사이언스",
    "전자공학",
    "산업공학",
];

// Three-syllable Korean names: one family syllable + two given syllables.
const FAMILY_NAMES: &[&str] = &[
    "김", "이", "박", "최", "정", "조", "윤", "장", "임", "한", "오", "서", "신", "권", "황", "안",
    "송", "류", "전", "홍", "고", "문", "양", "손",
];
const GIVEN_FIRST: &[&str] = &[
    "민", "서", "도", "지", "유", "하", "준", "태", "수", "현", "예", "아", "승", "우", "시", "연",
    "재", "선", "다", "윤",
];
const GIVEN_SECOND: &[&str] = &[
    "준", "빈", "율", "진", "후", "영", "현", "리", "빈", "연", "원", "아", "환", "우", "림", "혁",
    "솔", "별", "환", "미",
];

/// A synthetic account held in memory for the duration of one run. Only
/// rows derived from it are ever persisted; the email is the natural key
/// correlating it with the auth service.
#[derive(Debug, Clone)]
pub struct SeedUser {
    pub email: String,
    pub password: String,
    pub name: String,
    pub stacks: Vec<String>,
}

/// Uniform pick from a fixture pool.
pub fn pick<'a, R: RngExt>(rng: &mut R, pool: &[&'a str]) -> &'a str {
    pool[rng.random_range(0..pool.len())]
}

fn make_name<R: RngExt>(rng: &mut R) -> String {
    format!(
        "{}{}{}",
        pick(rng, FAMILY_NAMES),
        pick(rng, GIVEN_FIRST),
        pick(rng, GIVEN_SECOND)
    )
}

/// Synthesize `count` seed users: `user01@example.com` onward with a
/// zero-padded index, a generated name, and 2–4 distinct stack tags.
pub fn seed_users<R: RngExt>(rng: &mut R, count: usize) -> Vec<SeedUser> {
    (1..=count)
        .map(|i| {
            let stack_count = rng.random_range(2..=4);
            let mut stacks: Vec<String> = Vec::with_capacity(stack_count);
            while stacks.len() < stack_count {
                let stack = pick(rng, STACKS).to_owned();
                if !stacks.contains(&stack) {
                    stacks.push(stack);
                }
            }
            SeedUser {
                email: format!("user{i:02}@example.com"),
                password: SHARED_PASSWORD.to_owned(),
                name: make_name(rng),
                stacks,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn should_generate_requested_number_of_users() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(seed_users(&mut rng, TOTAL_USERS).len(), 80);
        assert!(seed_users(&mut rng, 0).is_empty());
    }

    #[test]
    fn should_zero_pad_emails_from_one() {
        let mut rng = StdRng::seed_from_u64(1);
        let seeds = seed_users(&mut rng, 12);
        assert_eq!(seeds[0].email, "user01@example.com");
        assert_eq!(seeds[8].email, "user09@example.com");
        assert_eq!(seeds[11].email, "user12@example.com");
    }

    #[test]
    fn should_give_every_user_two_to_four_distinct_stacks() {
        let mut rng = StdRng::seed_from_u64(7);
        for seed in seed_users(&mut rng, 40) {
            assert!((2..=4).contains(&seed.stacks.len()), "{:?}", seed.stacks);
            let mut deduped = seed.stacks.clone();
            deduped.sort();
            deduped.dedup();
            assert_eq!(deduped.len(), seed.stacks.len());
        }
    }

    #[test]
    fn should_build_three_syllable_names() {
        let mut rng = StdRng::seed_from_u64(3);
        for seed in seed_users(&mut rng, 20) {
            assert_eq!(seed.name.chars().count(), 3, "{}", seed.name);
        }
    }

    #[test]
    fn should_reproduce_fixtures_for_the_same_seed() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let left = seed_users(&mut a, 10);
        let right = seed_users(&mut b, 10);
        for (l, r) in left.iter().zip(&right) {
            assert_eq!(l.email, r.email);
            assert_eq!(l.name, r.name);
            assert_eq!(l.stacks, r.stacks);
        }
    }

    #[test]
    fn should_use_the_shared_password_for_every_user() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(
            seed_users(&mut rng, 10)
                .iter()
                .all(|seed| seed.password == SHARED_PASSWORD)
        );
    }
}
