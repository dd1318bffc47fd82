// Test fixtures - reusable test data
// Provides consistent timestamps and form input across test files

#![allow(dead_code)]

use launch_screen::models::timestamp::CivilTimestamp;

/// Sample timestamps for testing
pub mod dates {
    use super::*;

    /// Returns Dec 1, 2026 at 10:00 (default launch)
    pub fn launch() -> CivilTimestamp {
        CivilTimestamp::new(2026, 12, 1, 10, 0, 0).unwrap()
    }

    /// Returns Mar 24, 2026 at 10:00
    pub fn march_24_2026() -> CivilTimestamp {
        CivilTimestamp::new(2026, 3, 24, 10, 0, 0).unwrap()
    }

    /// Returns Feb 28, 2024 at midnight (day before leap day)
    pub fn before_leap_day_2024() -> CivilTimestamp {
        CivilTimestamp::new(2024, 2, 28, 0, 0, 0).unwrap()
    }

    /// Returns Feb 28, 2023 at midnight (no leap day follows)
    pub fn end_of_february_2023() -> CivilTimestamp {
        CivilTimestamp::new(2023, 2, 28, 0, 0, 0).unwrap()
    }
}

/// Sample early access applicants
pub mod applicants {
    pub struct Applicant {
        pub full_name: &'static str,
        pub email: &'static str,
        pub institution: &'static str,
        pub role: &'static str,
        pub referral_code: &'static str,
    }

    pub fn researcher() -> Applicant {
        Applicant {
            full_name: "Ada Lovelace",
            email: "ada@analytical.org",
            institution: "Analytical Society",
            role: "Researcher",
            referral_code: "",
        }
    }

    pub fn referred_student() -> Applicant {
        Applicant {
            full_name: "Alan Turing",
            email: "alan.turing@kings.cam.ac.uk",
            institution: "King's College",
            role: "Student",
            referral_code: "FRIEND-2026",
        }
    }
}
