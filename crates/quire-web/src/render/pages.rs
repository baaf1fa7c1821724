//! Page bodies placed inside [`shell`](super::shell).

use std::fmt::Write as _;

use quire_core::{post::ListedPost, profile::Profile};

use super::{category_path, escape, post_count_label, title_case};

// ─── Home ─────────────────────────────────────────────────────────────────────

/// Fixed home-page category cards: `(name, heading, blurb)`.
const CATEGORY_CARDS: [(&str, &str, &str); 3] = [
  (
    "tech",
    "Technology",
    "Latest trends in tech, programming tutorials, web development insights, \
     and digital innovations that are shaping our future.",
  ),
  (
    "lifestyle",
    "Lifestyle",
    "Tips for better living, health and wellness advice, travel experiences, \
     productivity hacks, and personal development insights.",
  ),
  (
    "creative",
    "Creative Writing",
    "Stories, poetry, creative essays, artistic expressions, writing \
     techniques, and imaginative content that inspires creativity.",
  ),
];

pub fn home(profile: Option<&Profile>) -> String {
  let greeting = match profile.and_then(Profile::display_name) {
    Some(name) => format!(
      "<p>Hello, I'm {}! Discover amazing stories, insights, and experiences \
       from my journey.</p>",
      escape(name)
    ),
    None => "<p>Discover amazing stories, insights, and experiences from \
             around the world. Join our community of writers and readers.</p>"
      .to_owned(),
  };

  let mut cards = String::new();
  for (name, heading, blurb) in CATEGORY_CARDS {
    let _ = write!(
      cards,
      r#"
        <div class="category-card">
          <h3>{heading}</h3>
          <p>{blurb}</p>
          <a href="{path}" class="read-more">Read {label} Posts →</a>
        </div>"#,
      path = category_path(name),
      label = title_case(name),
    );
  }

  let about = match profile.and_then(Profile::display_bio) {
    Some(bio) => format!(
      r#"
    <section class="about-section">
      <h2>About {who}</h2>
      <p>{bio}</p>
      <div class="section-actions">
        <a href="/post/view" class="cta-button">View All Posts</a>
      </div>
    </section>"#,
      who = escape(profile.and_then(Profile::display_name).unwrap_or("This Blog")),
      bio = escape(bio),
    ),
    None => String::new(),
  };

  format!(
    r##"
  <section class="hero">
    <div class="container">
      <h1>Welcome to My Blog</h1>
      {greeting}
      <a href="#content" class="cta-button">Explore Content</a>
    </div>
  </section>

  <div class="main-content container" id="content">
    <section class="categories">
      <h2>Explore Categories</h2>
      <div class="category-grid">{cards}
      </div>
    </section>
    {about}
  </div>
"##
  )
}

// ─── Posts ────────────────────────────────────────────────────────────────────

/// One post card. `link_category` adds a link back to the post's category.
fn post_card(listed: &ListedPost, link_category: bool) -> String {
  let label = escape(&title_case(&listed.category_name)).into_owned();
  let link = if link_category {
    format!(
      r#"
          <a href="{}" class="read-more">More {label} Posts →</a>"#,
      escape(&category_path(&listed.category_name))
    )
  } else {
    String::new()
  };

  format!(
    r#"
      <article class="post-card" id="post-{id}">
        <div class="post-image"></div>
        <div class="post-content">
          <div class="post-meta">
            <span>{label}</span>
            <span>Post #{id}</span>
          </div>
          <div class="post-text">{text}</div>{link}
        </div>
      </article>"#,
    id = listed.post.id,
    text = escape(&listed.post.text),
  )
}

fn post_grid(posts: &[ListedPost], link_category: bool) -> String {
  let mut html = String::from(r#"<div class="posts-grid">"#);
  for p in posts {
    html.push_str(&post_card(p, link_category));
  }
  html.push_str("\n    </div>");
  html
}

// ─── Category ─────────────────────────────────────────────────────────────────

pub fn category(name: &str, posts: &[ListedPost]) -> String {
  let raw_title = title_case(name);
  let title = escape(&raw_title);
  let name_html = escape(name);

  let listing = if posts.is_empty() {
    format!(
      r#"
    <div class="no-posts">
      <h3>No posts yet in {title}</h3>
      <p>Be the first to share something amazing! Use the form above to write your first {name_html} post.</p>
      <div class="section-actions">
        <a href="/" class="cta-button">← Back to Home</a>
      </div>
    </div>"#
    )
  } else {
    post_grid(posts, false)
  };

  format!(
    r#"
  <section class="category-hero">
    <div class="container">
      <h1>{title} Posts</h1>
      <p>Explore all posts in the {name_html} category. Share your thoughts and discover new perspectives.</p>
    </div>
  </section>

  <div class="main-content container">
    <section class="add-post-section">
      <div class="add-post-form">
        <h3>Share Your {title} Thoughts</h3>
        <p class="form-intro">Have something interesting to share about {name_html}? Write your thoughts below and contribute to our community!</p>
        <form method="POST" action="{action}">
          <div class="form-group">
            <label for="post">Your {title} Post:</label>
            <textarea name="post" id="post" placeholder="Write your {name_html} thoughts here... Share your insights, experiences, or questions!" required></textarea>
          </div>
          <button type="submit" class="submit-btn">Publish Post</button>
        </form>
      </div>
    </section>

    <section class="posts-section">
      <h2>{title} Posts Collection</h2>
      <p class="posts-count">{count}</p>
      {listing}
    </section>
  </div>
"#,
    action = escape(&category_path(name)),
    count = escape(&post_count_label(posts.len(), name)),
  )
}

// ─── All posts ────────────────────────────────────────────────────────────────

pub fn all_posts(posts: &[ListedPost]) -> String {
  let listing = if posts.is_empty() {
    r#"
    <div class="no-posts">
      <p>No posts available yet. Start by adding some content!</p>
      <div class="section-actions">
        <a href="/" class="cta-button">← Back to Home</a>
      </div>
    </div>"#
      .to_owned()
  } else {
    post_grid(posts, true)
  };

  format!(
    r#"
  <section class="category-hero">
    <div class="container">
      <h1>All Blog Posts</h1>
      <p>Browse through all blog posts from every category</p>
    </div>
  </section>

  <div class="main-content container">
    <section class="posts-section">
      <h2>All Blog Posts ({count})</h2>
      {listing}
    </section>
  </div>
"#,
    count = posts.len(),
  )
}

// ─── Errors ───────────────────────────────────────────────────────────────────

pub fn not_found(path: &str) -> String {
  format!(
    r#"
  <section class="category-hero">
    <div class="container">
      <h1>Page Not Found</h1>
      <p>Nothing lives at <code>{}</code>.</p>
      <div class="section-actions">
        <a href="/" class="cta-button">← Back to Home</a>
      </div>
    </div>
  </section>
"#,
    escape(path)
  )
}

pub fn server_error() -> String {
  r#"
  <section class="category-hero">
    <div class="container">
      <h1>Something Went Wrong</h1>
      <p>The page could not be loaded. Please try again in a moment.</p>
      <div class="section-actions">
        <a href="/" class="cta-button">← Back to Home</a>
      </div>
    </div>
  </section>
"#
  .to_owned()
}
