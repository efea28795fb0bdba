//! Template engine for rendering site pages.

use minijinja::{context, Environment};

use vitrine_catalog::{ProjectRecord, SiteProfile};

/// One project card on the home grid.
#[derive(Debug, Clone, serde::Serialize)]
pub struct ProjectCard {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub image: Option<String>,
    pub repository: Option<String>,
}

impl From<&ProjectRecord> for ProjectCard {
    fn from(record: &ProjectRecord) -> Self {
        Self {
            slug: record.slug(),
            title: record.title.clone(),
            description: record.description.clone(),
            technologies: record.technologies.clone(),
            image: record.image.clone(),
            repository: record.repository.clone(),
        }
    }
}

/// A status banner shown above the contact form.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Banner {
    /// `success` or `error`, used as a CSS class
    pub kind: String,
    pub message: String,
}

/// Context for the home page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct HomeContext {
    pub site_title: String,
    pub profile: SiteProfile,
    pub projects: Vec<ProjectCard>,
    pub banner: Option<Banner>,
    pub contact_enabled: bool,
}

/// Context for a project detail page.
#[derive(Debug, Clone, serde::Serialize)]
pub struct DetailContext {
    pub site_title: String,
    pub project: ProjectCard,
    /// Resolved README HTML; `None` renders the "content not found" message
    pub content_html: Option<String>,
}

/// Template engine using minijinja.
pub struct TemplateEngine {
    env: Environment<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with the built-in templates.
    pub fn new() -> Self {
        let mut env = Environment::new();

        env.add_template_owned("base.html".to_string(), BASE_TEMPLATE.to_string())
            .expect("Failed to add base template");

        env.add_template_owned("home.html".to_string(), HOME_TEMPLATE.to_string())
            .expect("Failed to add home template");

        env.add_template_owned("detail.html".to_string(), DETAIL_TEMPLATE.to_string())
            .expect("Failed to add detail template");

        Self { env }
    }

    /// Render the home page.
    pub fn render_home(&self, ctx: &HomeContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("home.html")?;

        tmpl.render(context! {
            title => "Home",
            site_title => &ctx.site_title,
            profile => &ctx.profile,
            projects => &ctx.projects,
            banner => &ctx.banner,
            contact_enabled => ctx.contact_enabled,
        })
    }

    /// Render a project detail page.
    pub fn render_detail(&self, ctx: &DetailContext) -> Result<String, minijinja::Error> {
        let tmpl = self.env.get_template("detail.html")?;

        tmpl.render(context! {
            title => &ctx.project.title,
            site_title => &ctx.site_title,
            project => &ctx.project,
            content_html => &ctx.content_html,
        })
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{{ title }} - {{ site_title }}</title>
  <link rel="stylesheet" href="/assets/main.css">
</head>
<body>
  <main class="main">
    {% block content %}{% endblock %}
  </main>
</body>
</html>"##;

const HOME_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<section class="hero">
  <h1>{{ profile.name }}</h1>
  <p class="tagline">{{ profile.tagline }}</p>
  <nav class="social">
    {% if profile.social.github %}<a href="{{ profile.social.github }}">GitHub</a>{% endif %}
    {% if profile.social.linkedin %}<a href="{{ profile.social.linkedin }}">LinkedIn</a>{% endif %}
    {% if profile.social.twitter %}<a href="{{ profile.social.twitter }}">Twitter</a>{% endif %}
    {% if profile.social.email %}<a href="mailto:{{ profile.social.email }}">Email</a>{% endif %}
  </nav>
</section>

<section class="about" id="about">
  {% for paragraph in profile.about %}<p>{{ paragraph }}</p>
  {% endfor %}
  {% if profile.skills %}
  <ul class="skills">
    {% for skill in profile.skills %}<li>{{ skill }}</li>
    {% endfor %}
  </ul>
  {% endif %}
</section>

<section class="projects" id="projects">
  <h2>Projects</h2>
  <div class="grid">
    {% for project in projects %}
    <a class="card" href="/projects/{{ project.slug }}">
      {% if project.image %}<img src="{{ project.image }}" alt="{{ project.title }}">{% endif %}
      <h3>{{ project.title }}</h3>
      <p>{{ project.description }}</p>
      <ul class="tech">
        {% for tech in project.technologies %}<li>{{ tech }}</li>
        {% endfor %}
      </ul>
    </a>
    {% endfor %}
  </div>
</section>

<section class="contact" id="contact">
  <h2>Contact</h2>
  {% if banner %}<div class="banner banner-{{ banner.kind }}">{{ banner.message }}</div>{% endif %}
  {% if contact_enabled %}
  <form method="post" action="/contact">
    <input type="text" name="name" placeholder="Your name" required>
    <input type="email" name="email" placeholder="Your email" required>
    <textarea name="message" placeholder="Your message" required></textarea>
    <button type="submit">Send</button>
  </form>
  {% else %}
  <p class="muted">The contact form is not configured.</p>
  {% endif %}
</section>
{% endblock %}"##;

const DETAIL_TEMPLATE: &str = r##"{% extends "base.html" %}

{% block content %}
<article class="detail">
  <a class="back" href="/">&larr; Back</a>
  <h1>{{ project.title }}</h1>
  {% if project.image %}<img class="preview" src="{{ project.image }}" alt="{{ project.title }}">{% endif %}
  <p>{{ project.description }}</p>
  <ul class="tech">
    {% for tech in project.technologies %}<li>{{ tech }}</li>
    {% endfor %}
  </ul>
  {% if project.repository %}<a class="repo" href="{{ project.repository }}">View on GitHub</a>{% endif %}

  {% if content_html %}
  <div class="readme">{{ content_html | safe }}</div>
  {% else %}
  <p class="not-found">README not found</p>
  {% endif %}
</article>
{% endblock %}"##;

#[cfg(test)]
mod tests {
    use vitrine_catalog::SocialLinks;

    use super::*;

    fn card() -> ProjectCard {
        ProjectCard {
            slug: "demo".to_string(),
            title: "Demo".to_string(),
            description: "A demo project".to_string(),
            technologies: vec!["Rust".to_string(), "CUDA".to_string()],
            image: Some("/assets/demo.png".to_string()),
            repository: Some("https://github.com/acme/demo".to_string()),
        }
    }

    fn profile() -> SiteProfile {
        SiteProfile {
            name: "Jane Doe".to_string(),
            tagline: "Quantitative researcher".to_string(),
            about: vec!["First paragraph.".to_string()],
            skills: vec!["Rust".to_string()],
            social: SocialLinks {
                github: Some("https://github.com/janedoe".to_string()),
                ..Default::default()
            },
        }
    }

    #[test]
    fn renders_home_page() {
        let engine = TemplateEngine::new();

        let html = engine
            .render_home(&HomeContext {
                site_title: "Jane Doe".to_string(),
                profile: profile(),
                projects: vec![card()],
                banner: None,
                contact_enabled: true,
            })
            .unwrap();

        assert!(html.contains("<h1>Jane Doe</h1>"));
        assert!(html.contains(r#"href="/projects/demo""#));
        assert!(html.contains(r#"action="/contact""#));
        assert!(html.contains("https://github.com/janedoe"));
    }

    #[test]
    fn renders_banner_and_disabled_form() {
        let engine = TemplateEngine::new();

        let html = engine
            .render_home(&HomeContext {
                site_title: "Jane Doe".to_string(),
                profile: profile(),
                projects: vec![],
                banner: Some(Banner {
                    kind: "error".to_string(),
                    message: "Something went wrong.".to_string(),
                }),
                contact_enabled: false,
            })
            .unwrap();

        assert!(html.contains("banner-error"));
        assert!(html.contains("Something went wrong."));
        assert!(html.contains("not configured"));
        assert!(!html.contains(r#"action="/contact""#));
    }

    #[test]
    fn renders_detail_with_readme() {
        let engine = TemplateEngine::new();

        let html = engine
            .render_detail(&DetailContext {
                site_title: "Jane Doe".to_string(),
                project: card(),
                content_html: Some("<h1>Demo</h1><p>Body</p>".to_string()),
            })
            .unwrap();

        assert!(html.contains("<title>Demo - Jane Doe</title>"));
        assert!(html.contains("<h1>Demo</h1><p>Body</p>"));
        assert!(html.contains("View on GitHub"));
        assert!(!html.contains("README not found"));
    }

    #[test]
    fn renders_detail_not_found_message() {
        let engine = TemplateEngine::new();

        let html = engine
            .render_detail(&DetailContext {
                site_title: "Jane Doe".to_string(),
                project: card(),
                content_html: None,
            })
            .unwrap();

        assert!(html.contains("README not found"));
    }
}
