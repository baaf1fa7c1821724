//! HTML rendering: the shared document shell and small text helpers.
//!
//! Every value that did not originate in this module (store rows, URL
//! segments, flash messages) goes through [`escape`] before it reaches the
//! page.

pub mod pages;

use std::borrow::Cow;
use std::fmt::Write as _;

use crate::flash::Flash;

const STYLESHEET: &str = include_str!("../../assets/blog.css");
const SCRIPT: &str = include_str!("../../assets/blog.js");

/// HTML-escape `& < > " '`.
pub fn escape(raw: &str) -> Cow<'_, str> { quick_xml::escape::escape(raw) }

/// Upper-case the first letter of every word, lower-case the rest.
pub fn title_case(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  let mut at_word_start = true;
  for c in s.chars() {
    if c.is_alphabetic() {
      if at_word_start {
        out.extend(c.to_uppercase());
      } else {
        out.extend(c.to_lowercase());
      }
      at_word_start = false;
    } else {
      out.push(c);
      at_word_start = true;
    }
  }
  out
}

/// "Showing 1 post in tech", "Showing 3 posts in tech", or the empty-state
/// line when there are none.
pub fn post_count_label(count: usize, category: &str) -> String {
  match count {
    0 => "No posts yet in this category".to_owned(),
    1 => format!("Showing 1 post in {category}"),
    n => format!("Showing {n} posts in {category}"),
  }
}

/// URL path of a category page, with the name percent-encoded.
pub fn category_path(name: &str) -> String {
  let mut path = String::from("/post/category/");
  for b in name.bytes() {
    if b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b'~') {
      path.push(b as char);
    } else {
      let _ = write!(path, "%{b:02X}");
    }
  }
  path
}

fn flash_block(flashes: &[Flash]) -> String {
  if flashes.is_empty() {
    return String::new();
  }
  let mut html = String::from(r#"<div class="flash-messages container">"#);
  for f in flashes {
    let _ = write!(
      html,
      r#"<div class="flash {}">{}</div>"#,
      f.level.as_str(),
      escape(&f.message)
    );
  }
  html.push_str("</div>");
  html
}

/// Wrap `content` in the full document: head, navigation, flashes, footer.
///
/// `content` is trusted markup produced by [`pages`]; `title` is escaped.
pub fn shell(title: &str, flashes: &[Flash], content: &str) -> String {
  format!(
    r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{title}</title>
  <style>{STYLESHEET}</style>
</head>
<body>
  <header>
    <nav class="container">
      <a href="/" class="logo">MyBlog</a>
      <ul class="nav-links">
        <li><a href="/">Home</a></li>
        <li><a href="/about">About</a></li>
        <li><a href="/post/category/tech">Tech</a></li>
        <li><a href="/post/category/lifestyle">Lifestyle</a></li>
        <li><a href="/post/category/creative">Creative</a></li>
        <li><a href="/post/view">All Posts</a></li>
      </ul>
    </nav>
  </header>

  <main>
    {flashes}
    {content}
  </main>

  <footer>
    <div class="container">
      <p>&copy; 2025 MyBlog. Made with Rust &amp; axum</p>
    </div>
  </footer>

  <script>{SCRIPT}</script>
</body>
</html>
"#,
    title = escape(title),
    flashes = flash_block(flashes),
  )
}
