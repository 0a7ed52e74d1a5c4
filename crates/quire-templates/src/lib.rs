pub const BASE_TEMPLATE: &str = include_str!("../templates/base.html");
pub const INDEX_TEMPLATE: &str = include_str!("../templates/index.html");
pub const POST_TEMPLATE: &str = include_str!("../templates/post.html");

pub const DEFAULT_CSS: &str = include_str!("../templates/default.css");

/// Page templates by the file name a site can override them with.
pub const PAGE_TEMPLATES: [(&str, &str); 3] = [
  ("base.html", BASE_TEMPLATE),
  ("index.html", INDEX_TEMPLATE),
  ("post.html", POST_TEMPLATE),
];
