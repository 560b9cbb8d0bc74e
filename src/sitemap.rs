//! Flat listing of every link a site exposes, in display order.

use std::collections::HashSet;
use std::fmt;

use crate::site::SiteConfig;

/// One labeled link and the menu it appears in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapEntry {
    /// Sidebar prefix, or `None` for the nav bar.
    pub section: Option<String>,
    pub label: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sitemap {
    pub entries: Vec<SitemapEntry>,
}

/// List the nav bar's links, then each sidebar's in registration order.
///
/// A link that appears in more than one menu is listed once per menu.
pub fn sitemap(site: &SiteConfig) -> Sitemap {
    let mut entries: Vec<SitemapEntry> = site
        .nav()
        .flatten_links()
        .map(|(label, link)| SitemapEntry {
            section: None,
            label: label.to_string(),
            link: link.to_string(),
        })
        .collect();

    for (prefix, tree) in site.sidebars().iter() {
        entries.extend(tree.flatten_links().map(|(label, link)| SitemapEntry {
            section: Some(prefix.to_string()),
            label: label.to_string(),
            link: link.to_string(),
        }));
    }

    Sitemap { entries }
}

impl Sitemap {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries of one section (`None` for the nav bar).
    pub fn section<'a>(&'a self, section: Option<&'a str>) -> impl Iterator<Item = &'a SitemapEntry> {
        self.entries
            .iter()
            .filter(move |e| e.section.as_deref() == section)
    }

    /// Site-relative links, first occurrence only.
    pub fn internal_links(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .map(|e| e.link.as_str())
            .filter(|link| link.starts_with('/'))
            .filter(|link| seen.insert(*link))
            .collect()
    }
}

impl fmt::Display for Sitemap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, entry) in self.entries.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}  {}", entry.link, entry.label)?;
        }
        Ok(())
    }
}
