#[cfg(test)]
pub mod test {
    use toml::Table;

    use crate::nav::NavigationTree;
    use crate::sidebar::SidebarRegistry;
    use crate::site::SiteConfig;
    use crate::types::{HeadTag, NavGroup, NavItem};

    /// The Gokku documentation site as a `site.toml`. Loads to [`gokku_site`].
    pub const GOKKU_TOML: &str = r#"
title = "Gokku"
description = "Lightweight git-push deployment system for Go and multi-language applications"
base = "/"
version = "1.0.53"
ignore_dead_links = true

[[head]]
tag = "link"
attrs = { rel = "icon", href = "/favicon.ico" }

[[nav]]
text = "Home"
link = "/"

[[nav]]
text = "Guide"
link = "/guide/getting-started"

[[nav]]
text = "Examples"
link = "/examples/"

[[nav]]
text = "Reference"
link = "/reference/configuration"

[[sidebar]]
prefix = "/guide/"

[[sidebar.groups]]
text = "Introduction"
items = [
    { text = "What is Gokku?", link = "/guide/what-is-gokku" },
    { text = "Getting Started", link = "/guide/getting-started" },
    { text = "Installation", link = "/guide/installation" },
]

[[sidebar.groups]]
text = "Core Concepts"
items = [
    { text = "Configuration", link = "/guide/configuration" },
    { text = "Environments", link = "/guide/environments" },
    { text = "Deployment", link = "/guide/deployment" },
]

[[sidebar.groups]]
text = "Advanced"
items = [
    { text = "Docker Support", link = "/guide/docker" },
    { text = "Environment Variables", link = "/guide/env-vars" },
    { text = "Rollback", link = "/guide/rollback" },
]

[[sidebar]]
prefix = "/examples/"

[[sidebar.groups]]
text = "Examples"
items = [
    { text = "Overview", link = "/examples/" },
    { text = "Go Application", link = "/examples/go-app" },
    { text = "Python Application", link = "/examples/python-app" },
    { text = "Docker Application", link = "/examples/docker-app" },
    { text = "Multi-App Project", link = "/examples/multi-app" },
]

[[sidebar]]
prefix = "/reference/"

[[sidebar.groups]]
text = "Reference"
items = [
    { text = "Configuration", link = "/reference/configuration" },
    { text = "CLI Commands", link = "/reference/cli" },
]

[theme]
logo = "/logo.svg"
social_links = [{ icon = "github", link = "https://github.com/thadeu/gokku" }]
footer = { message = "Released under the MIT License.", copyright = "Copyright © 2025-present" }
search = { provider = "local" }
"#;

    pub fn gokku_nav() -> NavigationTree {
        let mut nav = NavigationTree::new();
        nav.add_item(NavItem::new("Home", "/")).unwrap();
        nav.add_item(NavItem::new("Guide", "/guide/getting-started"))
            .unwrap();
        nav.add_item(NavItem::new("Examples", "/examples/")).unwrap();
        nav.add_item(NavItem::new("Reference", "/reference/configuration"))
            .unwrap();
        nav
    }

    pub fn gokku_guide_sidebar() -> NavigationTree {
        let mut tree = NavigationTree::new();
        tree.add_group(
            NavGroup::new("Introduction")
                .item("What is Gokku?", "/guide/what-is-gokku")
                .item("Getting Started", "/guide/getting-started")
                .item("Installation", "/guide/installation"),
        )
        .unwrap();
        tree.add_group(
            NavGroup::new("Core Concepts")
                .item("Configuration", "/guide/configuration")
                .item("Environments", "/guide/environments")
                .item("Deployment", "/guide/deployment"),
        )
        .unwrap();
        tree.add_group(
            NavGroup::new("Advanced")
                .item("Docker Support", "/guide/docker")
                .item("Environment Variables", "/guide/env-vars")
                .item("Rollback", "/guide/rollback"),
        )
        .unwrap();
        tree
    }

    pub fn gokku_sidebars() -> SidebarRegistry {
        let mut examples = NavigationTree::new();
        examples
            .add_group(
                NavGroup::new("Examples")
                    .item("Overview", "/examples/")
                    .item("Go Application", "/examples/go-app")
                    .item("Python Application", "/examples/python-app")
                    .item("Docker Application", "/examples/docker-app")
                    .item("Multi-App Project", "/examples/multi-app"),
            )
            .unwrap();

        let mut reference = NavigationTree::new();
        reference
            .add_group(
                NavGroup::new("Reference")
                    .item("Configuration", "/reference/configuration")
                    .item("CLI Commands", "/reference/cli"),
            )
            .unwrap();

        let mut registry = SidebarRegistry::new();
        registry.register("/guide/", gokku_guide_sidebar()).unwrap();
        registry.register("/examples/", examples).unwrap();
        registry.register("/reference/", reference).unwrap();
        registry
    }

    /// Theme passthrough: logo, social links, footer, search.
    pub fn gokku_metadata() -> Table {
        r#"
logo = "/logo.svg"
social_links = [{ icon = "github", link = "https://github.com/thadeu/gokku" }]

[footer]
message = "Released under the MIT License."
copyright = "Copyright © 2025-present"

[search]
provider = "local"
"#
        .parse::<Table>()
        .unwrap()
    }

    pub fn gokku_site() -> SiteConfig {
        SiteConfig::builder()
            .title("Gokku")
            .description(
                "Lightweight git-push deployment system for Go and multi-language applications",
            )
            .base_path("/")
            .version("1.0.53")
            .ignore_dead_links(true)
            .head(
                HeadTag::new("link")
                    .attr("rel", "icon")
                    .attr("href", "/favicon.ico"),
            )
            .nav(gokku_nav())
            .sidebars(gokku_sidebars())
            .metadata(gokku_metadata())
            .build()
            .unwrap()
    }

    /// A tree with one group holding one link.
    pub fn single_group(text: &str, link: &str) -> NavigationTree {
        let mut tree = NavigationTree::new();
        tree.add_group(NavGroup::new(text).item(format!("{text} page"), link))
            .unwrap();
        tree
    }
}
