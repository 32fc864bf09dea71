use thiserror::Error;

pub const CONTACT_SECTION: &str = "contact";
pub const PROJECTS_SECTION: &str = "projects";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnchorError {
    #[error("no section with id `{0}` on the page")]
    MissingSection(String),
}

/// Finds page sections by id and brings them into view.
pub trait SectionLookup {
    type Section;

    fn find_section(&self, id: &str) -> Option<Self::Section>;
    fn scroll_into_view(&self, section: &Self::Section);
}

pub fn scroll_to_section<L: SectionLookup>(lookup: &L, id: &str) -> Result<(), AnchorError> {
    let section = lookup
        .find_section(id)
        .ok_or_else(|| AnchorError::MissingSection(id.to_string()))?;
    lookup.scroll_into_view(&section);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    struct FakePage {
        ids: Vec<&'static str>,
        scrolled: RefCell<Vec<String>>,
    }

    impl FakePage {
        fn new(ids: Vec<&'static str>) -> Self {
            Self {
                ids,
                scrolled: RefCell::new(vec![]),
            }
        }
    }

    impl SectionLookup for FakePage {
        type Section = String;

        fn find_section(&self, id: &str) -> Option<String> {
            self.ids.iter().find(|s| **s == id).map(|s| s.to_string())
        }

        fn scroll_into_view(&self, section: &String) {
            self.scrolled.borrow_mut().push(section.clone());
        }
    }

    #[test]
    fn test_scrolls_once_when_present() {
        let page = FakePage::new(vec![CONTACT_SECTION, PROJECTS_SECTION]);
        assert!(scroll_to_section(&page, CONTACT_SECTION).is_ok());
        assert_eq!(*page.scrolled.borrow(), vec!["contact".to_string()]);
    }

    #[test]
    fn test_noop_when_absent() {
        let page = FakePage::new(vec![PROJECTS_SECTION]);
        let res = scroll_to_section(&page, CONTACT_SECTION);
        assert_eq!(res, Err(AnchorError::MissingSection("contact".to_string())));
        assert!(page.scrolled.borrow().is_empty());
    }

    #[test]
    fn test_error_message() {
        let err = AnchorError::MissingSection("projects".to_string());
        assert_eq!(err.to_string(), "no section with id `projects` on the page");
    }
}
