//! Well-formedness of link targets.
//!
//! A link is either internal (a site-relative path starting with a single `/`)
//! or external (an absolute URL with a host, or a `mailto:` address).

use url::Url;

use crate::error::SitefigError;
use crate::nav::NavigationTree;

/// Check one link target.
pub fn check_link(link: &str) -> Result<(), SitefigError> {
    if link.is_empty() {
        return Err(SitefigError::malformed(link, "link is empty"));
    }

    if link.starts_with('/') {
        if link.starts_with("//") {
            return Err(SitefigError::malformed(
                link,
                "protocol-relative links are not site paths; use an absolute URL",
            ));
        }
        if link.chars().any(char::is_whitespace) {
            return Err(SitefigError::malformed(link, "path contains whitespace"));
        }
        return Ok(());
    }

    match Url::parse(link) {
        Ok(url) if url.scheme() == "mailto" => Ok(()),
        Ok(url) if url.has_host() => Ok(()),
        Ok(url) => Err(SitefigError::malformed(
            link,
            format!("'{}:' URL has no host", url.scheme()),
        )),
        Err(e) => Err(SitefigError::malformed(
            link,
            format!("expected a path starting with '/' or an absolute URL ({e})"),
        )),
    }
}

/// Check every leaf link of a tree, stopping at the first bad one.
pub fn check_tree(tree: &NavigationTree) -> Result<(), SitefigError> {
    check_all(tree.flatten_links())
}

pub(crate) fn check_all<'a>(
    links: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Result<(), SitefigError> {
    links.into_iter().try_for_each(|(_, link)| check_link(link))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NavGroup;

    fn reason(link: &str) -> String {
        match check_link(link).unwrap_err() {
            SitefigError::MalformedLink { reason, .. } => reason,
            other => panic!("Expected MalformedLink, got: {other:?}"),
        }
    }

    #[test]
    fn internal_paths_pass() {
        for link in ["/", "/guide/", "/guide/getting-started", "/examples/go-app#run"] {
            check_link(link).unwrap();
        }
    }

    #[test]
    fn external_urls_pass() {
        check_link("https://github.com/thadeu/gokku").unwrap();
        check_link("http://localhost:5173/docs").unwrap();
        check_link("mailto:docs@example.com").unwrap();
    }

    #[test]
    fn empty_link_rejected() {
        assert!(reason("").contains("empty"));
    }

    #[test]
    fn relative_path_rejected() {
        assert!(reason("guide/intro").contains("absolute URL"));
    }

    #[test]
    fn protocol_relative_rejected() {
        assert!(reason("//cdn.example.com/x.js").contains("protocol-relative"));
    }

    #[test]
    fn whitespace_in_path_rejected() {
        assert!(reason("/guide/getting started").contains("whitespace"));
    }

    #[test]
    fn hostless_scheme_rejected() {
        assert!(reason("javascript:alert(1)").contains("no host"));
    }

    #[test]
    fn check_tree_reports_first_bad_link() {
        let mut tree = NavigationTree::new();
        tree.add_group(
            NavGroup::new("Mixed")
                .item("Good", "/good")
                .item("Bad", "bad")
                .item("Worse", ""),
        )
        .unwrap();
        match check_tree(&tree).unwrap_err() {
            SitefigError::MalformedLink { link, .. } => assert_eq!(link, "bad"),
            other => panic!("Expected MalformedLink, got: {other:?}"),
        }
    }
}
