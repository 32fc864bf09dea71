use chrono::NaiveDate;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

const PROFILE_FILE: &str = "profile.json";

static GLOBAL_PROFILE: LazyLock<Profile> = LazyLock::new(|| match load_profile() {
    Ok(p) => p,
    Err(e) => {
        log::error!("falling back to an empty profile: {e}");
        Profile::default()
    }
});

#[derive(Embed)]
#[folder = "content"]
pub struct Content;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
    /// Icon font class, e.g. `devicon-github-original`
    pub icon: String,
    /// Utility class applied on hover
    pub hover: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tech {
    pub label: String,
    pub hint: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavItem {
    pub id: String,
    pub label: String,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.id)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Resume {
    pub href: String,
    pub filename: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub brand: String,
    pub badge: String,
    pub greeting: String,
    pub roles: Vec<String>,
    pub bio: String,
    pub social: Vec<SocialLink>,
    pub tech: Vec<Tech>,
    pub nav: Vec<NavItem>,
    pub stats: Vec<Stat>,
    pub career_start: NaiveDate,
    pub resume: Resume,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProfileError {
    #[error("Profile content not found")]
    NotFound,
    #[error("Couldn't parse profile content: {0}")]
    Parse(String),
}

impl Profile {
    pub fn years_of_experience(&self, today: NaiveDate) -> u32 {
        today.years_since(self.career_start).unwrap_or(0)
    }

    pub fn stats_with_experience(&self, today: NaiveDate) -> Vec<Stat> {
        let mut stats = self.stats.clone();
        stats.push(Stat {
            value: format!("{}+", self.years_of_experience(today)),
            label: "Years Exp".to_string(),
        });
        stats
    }

    /// Configured stats, plus the experience stat once the date is known.
    pub fn stats_as_of(&self, today: Option<NaiveDate>) -> Vec<Stat> {
        match today {
            Some(today) => self.stats_with_experience(today),
            None => self.stats.clone(),
        }
    }
}

pub fn load_profile() -> Result<Profile, ProfileError> {
    let file = Content::get(PROFILE_FILE).ok_or(ProfileError::NotFound)?;
    parse_profile(&file.data)
}

fn parse_profile(data: &[u8]) -> Result<Profile, ProfileError> {
    serde_json::from_slice(data).map_err(|e| ProfileError::Parse(e.to_string()))
}

/// The page content, loaded once per process.
pub fn profile() -> &'static Profile {
    &GLOBAL_PROFILE
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_embedded_profile_parses() {
        let p = load_profile().expect("embedded profile should parse");
        assert_eq!(p.name, "Alex Johnson");
        assert_eq!(p.roles.len(), 4);
        assert_eq!(p.resume.href, "/resume.pdf");
    }

    #[test]
    fn test_lists_keep_file_order() {
        let p = profile();
        let social = p.social.iter().map(|s| s.label.as_str()).collect::<Vec<_>>();
        assert_eq!(social, vec!["GitHub", "LinkedIn", "Twitter", "Email"]);
        let tech = p.tech.iter().map(|t| t.label.as_str()).collect::<Vec<_>>();
        assert_eq!(
            tech,
            vec!["React", "TypeScript", "Node.js", "Next.js", "Tailwind", "MongoDB"]
        );
        let nav = p.nav.iter().map(|n| n.id.as_str()).collect::<Vec<_>>();
        assert_eq!(nav, vec!["home", "projects", "skills", "experience", "contact"]);
    }

    #[test]
    fn test_nav_href() {
        let item = NavItem {
            id: "contact".to_string(),
            label: "Contact".to_string(),
        };
        assert_eq!(item.href(), "#contact");
    }

    #[test]
    fn test_years_of_experience() {
        let p = Profile {
            career_start: date(2021, 6, 1),
            ..Default::default()
        };
        assert_eq!(p.years_of_experience(date(2025, 5, 31)), 3);
        assert_eq!(p.years_of_experience(date(2025, 6, 1)), 4);
        // before the start date
        assert_eq!(p.years_of_experience(date(2020, 1, 1)), 0);
    }

    #[test]
    fn test_stats_with_experience_appends() {
        let p = Profile {
            stats: vec![Stat {
                value: "50+".to_string(),
                label: "Projects".to_string(),
            }],
            career_start: date(2021, 1, 1),
            ..Default::default()
        };
        let stats = p.stats_with_experience(date(2025, 3, 1));
        assert_eq!(stats.len(), 2);
        assert_eq!(stats[0].label, "Projects");
        assert_eq!(stats[1].value, "4+");
        assert_eq!(stats[1].label, "Years Exp");
    }

    #[test]
    fn test_stats_as_of_unknown_date_skips_experience() {
        let p = Profile {
            stats: vec![Stat {
                value: "50+".to_string(),
                label: "Projects".to_string(),
            }],
            career_start: date(2021, 1, 1),
            ..Default::default()
        };
        assert_eq!(p.stats_as_of(None), p.stats);
        let stats = p.stats_as_of(Some(date(2025, 3, 1)));
        assert_eq!(stats.last().map(|s| s.label.as_str()), Some("Years Exp"));
    }

    #[test]
    fn test_parse_error() {
        let err = parse_profile(b"{\"name\": 3}").unwrap_err();
        assert!(matches!(err, ProfileError::Parse(_)));
        assert!(err.to_string().starts_with("Couldn't parse profile content"));
    }
}
