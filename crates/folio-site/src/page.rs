//! Page assembly
//!
//! Wraps the rendered fragments in the full HTML document: theme attribute on
//! the root element, nav links, theme toggle control, the two identified
//! content containers, and the publication filter buttons.

use folio_markup::escape_html;

use crate::site::SitePage;
use crate::theme::Theme;

/// Assemble the complete HTML document for a built page.
pub fn render_page(page: &SitePage, theme: Theme) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="en" data-theme="{theme}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>{title}</title>
<link rel="stylesheet" href="style.css">
</head>
<body>
<header class="site-header">
<nav>
<ul class="nav-links">
<li><a href="#hero">About</a></li>
<li><a href="#publications">Publications</a></li>
</ul>
<button id="theme-toggle" aria-label="Toggle theme">
<span id="icon-sun"></span>
<span id="icon-moon"></span>
</button>
</nav>
</header>
<main>
<section id="hero">
<div id="hero-content">{hero}</div>
</section>
<section id="publications" class="section">
<h2>Publications</h2>
<div class="pub-filters">
<button class="filter-btn active" data-filter="all">All</button>
<button class="filter-btn" data-filter="featured">Featured</button>
<button class="filter-btn" data-filter="conference">Conference</button>
<button class="filter-btn" data-filter="preprint">Preprints</button>
</div>
<ul id="publications-content">{publications}</ul>
</section>
</main>
</body>
</html>
"##,
        theme = theme.as_str(),
        title = escape_html(&page.title),
        hero = page.hero_html,
        publications = page.publications_html,
    )
}
