use std::fmt::Write;
use std::time::Duration;

use newsroom_core::format::escape_html;
use newsroom_core::{
    AppViewModel, ArticleCardView, GridView, HeroView, ModalBodyView, ModalTitleView, ModalView,
    NewsletterView, NotificationView, RecommendationCardView, LOADING_CARD_COUNT,
};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use super::constants::*;
use super::document::{DomCommand, ModalDisplay};

/// Characters `encodeURIComponent` leaves alone.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const STATE_BOX_STYLE: &str = "grid-column:1/-1;text-align:center;padding:60px;";

pub fn render(view: &AppViewModel) -> Vec<DomCommand> {
    let (modal_display, modal_title, recommendations) = match &view.modal {
        ModalView::Hidden => (ModalDisplay::Hidden, String::new(), String::new()),
        ModalView::Shown {
            closing,
            title,
            body,
        } => (
            if *closing {
                ModalDisplay::FadingOut
            } else {
                ModalDisplay::Visible
            },
            modal_title_html(title),
            modal_body_html(body),
        ),
    };

    vec![
        set(
            Region::CurrentDate,
            view.today.as_deref().map(escape_html).unwrap_or_default(),
        ),
        set(Region::Hero, hero_html(&view.hero)),
        set(Region::FeaturedGrid, grid_html(&view.grid)),
        set(Region::ModalTitle, modal_title),
        set(Region::Recommendations, recommendations),
        DomCommand::SetModalDisplay(modal_display),
        DomCommand::SetBodyScrollLocked(view.scroll_locked),
        set(Region::Newsletter, newsletter_html(&view.newsletter)),
        set(Region::Notifications, notifications_html(&view.notifications)),
    ]
}

fn set(region: Region, html: String) -> DomCommand {
    DomCommand::SetInnerHtml { region, html }
}

fn image_url(title: &str, width: u32, height: u32) -> String {
    let seed = utf8_percent_encode(title, URI_COMPONENT);
    format!("https://picsum.photos/seed/{seed}/{width}/{height}")
}

fn delay_css(delay: Duration) -> String {
    format!("{}s", delay.as_secs_f64())
}

fn card_action_attrs(card: &ArticleCardView) -> String {
    format!(
        r#"data-action="{ACTION_OPEN_ARTICLE}" data-article-id="{}" data-title="{}""#,
        card.article_id,
        escape_html(&card.title)
    )
}

fn hero_html(hero: &HeroView) -> String {
    match hero {
        HeroView::Blank => String::new(),
        HeroView::Loading => concat!(
            r#"<div class="hero-card" style="pointer-events:none">"#,
            r#"<div class="hero-image" style="background:#f0f0f0;display:flex;align-items:center;justify-content:center;">"#,
            r#"<div class="loading" style="width:40px;height:40px;border-width:4px;"></div></div>"#,
            r#"<div class="hero-content"><div class="hero-badge">LOADING...</div>"#,
            r#"<h2>Loading featured news...</h2></div></div>"#
        )
        .to_string(),
        HeroView::Article(card) => format!(
            r##"<div class="hero-card" {attrs}><div class="hero-image"><img src="{img}" alt="Hero Image" loading="lazy"></div><div class="hero-content"><div class="hero-badge">NEWS OF THE DAY</div><h2>{title}</h2><div class="hero-meta"><span><i class="fas fa-calendar-alt"></i> {date}</span><span><i class="fas fa-clock"></i> 5 min read</span><span><i class="fas fa-eye"></i> Trending</span></div></div></div>"##,
            attrs = card_action_attrs(card),
            img = escape_html(&image_url(&card.title, 800, 500)),
            title = escape_html(&card.title),
            date = escape_html(&card.date_label),
        ),
        HeroView::Empty | HeroView::Failed => {
            let class = if matches!(hero, HeroView::Empty) {
                "state-empty"
            } else {
                "state-error"
            };
            format!(
                r#"<div class="hero-state {class}" style="padding:60px;text-align:center"><h2>{message}</h2><button data-action="{ACTION_RETRY}">Retry</button></div>"#,
                message = escape_html(hero.message().unwrap_or_default()),
            )
        }
    }
}

fn grid_html(grid: &GridView) -> String {
    match grid {
        GridView::Blank => String::new(),
        GridView::Loading => concat!(
            r#"<div class="news-card" style="pointer-events:none;">"#,
            r#"<div style="height:200px;background:#f0f0f0;display:flex;align-items:center;justify-content:center;">"#,
            r#"<div class="loading"></div></div>"#,
            r#"<div class="card-content"><h3>Loading...</h3></div></div>"#
        )
        .repeat(LOADING_CARD_COUNT),
        GridView::Cards(cards) => {
            let mut out = String::new();
            for card in cards {
                let _ = write!(
                    out,
                    r##"<div class="news-card" {attrs} style="opacity:0;transform:translateY(20px);animation:fadeInUp 0.6s ease forwards;animation-delay:{delay};"><img src="{img}" alt="Article Image" loading="lazy"><div class="card-content"><h3>{title}</h3><div class="card-meta"><span><i class="fas fa-calendar-alt"></i> {date}</span><span><i class="fas fa-user"></i> Editor's Pick</span></div><a href="#" class="read-more">Discover Similar <i class="fas fa-arrow-right"></i></a></div></div>"##,
                    attrs = card_action_attrs(card),
                    delay = delay_css(card.animation_delay),
                    img = escape_html(&image_url(&card.title, 400, 200)),
                    title = escape_html(&card.title),
                    date = escape_html(&card.date_label),
                );
            }
            out
        }
    }
}

fn modal_title_html(title: &ModalTitleView) -> String {
    match title {
        ModalTitleView::Loading => r#"<span class="loading"></span> Loading..."#.to_string(),
        ModalTitleView::SimilarTo { title_preview } => format!(
            r#"<i class="fas fa-lightbulb"></i> Stories Similar to: &quot;{}&quot;"#,
            escape_html(title_preview)
        ),
        ModalTitleView::Settled => r#"<i class="fas fa-lightbulb"></i> Similar Stories"#.to_string(),
    }
}

fn modal_body_html(body: &ModalBodyView) -> String {
    match body {
        ModalBodyView::Loading => format!(
            r#"<div style="{STATE_BOX_STYLE}"><div class="loading" style="width:40px;height:40px;border-width:4px;margin:0 auto 20px;"></div><p>Loading recommendations...</p></div>"#
        ),
        ModalBodyView::Recommendations(cards) => {
            let mut out = String::new();
            for card in cards {
                out.push_str(&recommendation_card_html(card));
            }
            out
        }
        ModalBodyView::Empty { source_title } => format!(
            r#"<div class="modal-state state-empty" style="{STATE_BOX_STYLE}"><h3>No stories similar to &quot;{}&quot;</h3></div>"#,
            escape_html(source_title)
        ),
        ModalBodyView::Failed => format!(
            r#"<div class="modal-state state-error" style="{STATE_BOX_STYLE}"><h3>Failed to load recommendations</h3></div>"#
        ),
    }
}

fn recommendation_card_html(card: &RecommendationCardView) -> String {
    format!(
        r#"<div class="recommendation-card" style="opacity:0;transform:translateY(20px);animation:fadeInUp 0.5s ease forwards;animation-delay:{delay};"><img src="{img}" alt="Article Image" loading="lazy"><div class="rec-content"><h3>{title}</h3><div class="rec-meta"><span><i class="fas fa-calendar-alt"></i> {date}</span><div class="similarity-score">{percent}% Match</div></div><a href="{link}" target="_blank" rel="noopener noreferrer" class="rec-link"><i class="fas fa-external-link-alt"></i> Read Full Story</a></div></div>"#,
        delay = delay_css(card.animation_delay),
        img = escape_html(&image_url(&card.title, 300, 150)),
        title = escape_html(&card.title),
        date = escape_html(&card.date_label),
        percent = card.match_percent,
        link = escape_html(&card.link),
    )
}

fn newsletter_html(newsletter: &NewsletterView) -> String {
    let button = if newsletter.busy {
        format!(
            r#"<button data-action="{ACTION_SUBSCRIBE}" disabled><span class="loading"></span> Subscribing...</button>"#
        )
    } else {
        format!(r#"<button data-action="{ACTION_SUBSCRIBE}">Subscribe</button>"#)
    };
    format!(
        r#"<form class="newsletter-form"><input type="email" placeholder="Enter your email" value="{}">{button}</form>"#,
        escape_html(&newsletter.input)
    )
}

fn notifications_html(notifications: &[NotificationView]) -> String {
    let mut out = String::new();
    for notification in notifications {
        let animation = if notification.leaving {
            "slideOutRight 0.3s ease forwards"
        } else {
            "slideInRight 0.3s ease"
        };
        let _ = write!(
            out,
            r#"<div class="notification notification-{kind}" data-notification-id="{id}" style="position:fixed;top:20px;right:20px;background:{color};color:white;padding:15px 25px;border-radius:10px;z-index:9999;animation:{animation};">{message}</div>"#,
            kind = notification.severity.name(),
            id = notification.id,
            color = notification.severity.color(),
            message = escape_html(&notification.message),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use newsroom_core::{NotificationSeverity, NO_ARTICLES_MESSAGE};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::platform::ui::document::Document;

    fn card(id: u64, title: &str, index: u32) -> ArticleCardView {
        ArticleCardView {
            article_id: id,
            title: title.to_string(),
            date_label: "Jan 15, 2024".to_string(),
            animation_delay: Duration::from_millis(100) * index,
        }
    }

    fn rendered(view: &AppViewModel) -> Document {
        let mut doc = Document::new();
        doc.apply_all(render(view));
        doc
    }

    #[test]
    fn loading_state_shows_hero_placeholder_and_five_cards() {
        let view = AppViewModel {
            hero: HeroView::Loading,
            grid: GridView::Loading,
            ..AppViewModel::default()
        };
        let doc = rendered(&view);
        assert!(doc.region(Region::Hero).contains("Loading featured news..."));
        assert_eq!(
            doc.region(Region::FeaturedGrid)
                .matches(r#"class="news-card""#)
                .count(),
            LOADING_CARD_COUNT
        );
    }

    #[test]
    fn hero_and_grid_cards_carry_activation_data() {
        let view = AppViewModel {
            hero: HeroView::Article(card(10, "Lead <story>", 0)),
            grid: GridView::Cards(vec![card(3, "Second", 0), card(7, "Third", 1)]),
            ..AppViewModel::default()
        };
        let doc = rendered(&view);

        let hero = doc.region(Region::Hero);
        assert!(hero.contains(r#"data-article-id="10""#));
        assert!(hero.contains(r#"data-title="Lead &lt;story&gt;""#));
        assert!(hero.contains("NEWS OF THE DAY"));
        assert!(hero.contains("https://picsum.photos/seed/Lead%20%3Cstory%3E/800/500"));
        assert!(!hero.contains("<story>"));

        let grid = doc.region(Region::FeaturedGrid);
        let second = grid.find(r#"data-article-id="3""#).unwrap();
        let third = grid.find(r#"data-article-id="7""#).unwrap();
        assert!(second < third);
        assert!(grid.contains("animation-delay:0s;"));
        assert!(grid.contains("animation-delay:0.1s;"));
        assert_eq!(grid.matches("Editor's Pick").count(), 2);
        assert!(grid.contains(
            r##"<a href="#" class="read-more">Discover Similar <i class="fas fa-arrow-right"></i></a>"##
        ));
        assert!(grid.contains("https://picsum.photos/seed/Second/400/200"));
    }

    #[test]
    fn empty_and_failed_heroes_are_distinct_but_both_offer_retry() {
        let empty = rendered(&AppViewModel {
            hero: HeroView::Empty,
            ..AppViewModel::default()
        });
        let failed = rendered(&AppViewModel {
            hero: HeroView::Failed,
            ..AppViewModel::default()
        });

        let empty_hero = empty.region(Region::Hero);
        assert!(empty_hero.contains(NO_ARTICLES_MESSAGE));
        assert!(empty_hero.contains("state-empty"));
        assert!(empty_hero.contains(r#"data-action="retry""#));
        assert_eq!(empty.region(Region::FeaturedGrid), "");

        let failed_hero = failed.region(Region::Hero);
        assert!(failed_hero.contains("Failed to load articles."));
        assert!(failed_hero.contains("state-error"));
        assert!(failed_hero.contains(r#"data-action="retry""#));
    }

    #[test]
    fn recommendations_render_percent_and_safe_link() {
        let view = AppViewModel {
            modal: ModalView::Shown {
                closing: false,
                title: ModalTitleView::SimilarTo {
                    title_preview: "Budget \"vote\"".to_string(),
                },
                body: ModalBodyView::Recommendations(vec![RecommendationCardView {
                    title: "Tax reform".to_string(),
                    date_label: "Feb 1, 2024".to_string(),
                    match_percent: 87,
                    link: "https://n.example/7?a=1&b=2".to_string(),
                    animation_delay: Duration::ZERO,
                }]),
            },
            scroll_locked: true,
            ..AppViewModel::default()
        };
        let doc = rendered(&view);

        assert_eq!(
            doc.region(Region::ModalTitle),
            r#"<i class="fas fa-lightbulb"></i> Stories Similar to: &quot;Budget &quot;vote&quot;&quot;"#
        );
        let body = doc.region(Region::Recommendations);
        assert!(body.contains("87% Match"));
        assert!(body.contains(r#"href="https://n.example/7?a=1&amp;b=2" target="_blank" rel="noopener noreferrer""#));
        assert_eq!(doc.modal_display(), ModalDisplay::Visible);
        assert!(doc.scroll_locked());
    }

    #[test]
    fn modal_empty_and_error_bodies() {
        let empty = rendered(&AppViewModel {
            modal: ModalView::Shown {
                closing: false,
                title: ModalTitleView::Settled,
                body: ModalBodyView::Empty {
                    source_title: "Quiet <day>".to_string(),
                },
            },
            ..AppViewModel::default()
        });
        assert!(empty
            .region(Region::Recommendations)
            .contains("No stories similar to &quot;Quiet &lt;day&gt;&quot;"));

        let failed = rendered(&AppViewModel {
            modal: ModalView::Shown {
                closing: true,
                title: ModalTitleView::Settled,
                body: ModalBodyView::Failed,
            },
            ..AppViewModel::default()
        });
        assert!(failed
            .region(Region::Recommendations)
            .contains("Failed to load recommendations"));
        assert_eq!(failed.modal_display(), ModalDisplay::FadingOut);
    }

    #[test]
    fn hidden_modal_clears_its_regions() {
        let doc = rendered(&AppViewModel::default());
        assert_eq!(doc.modal_display(), ModalDisplay::Hidden);
        assert_eq!(doc.region(Region::ModalTitle), "");
        assert_eq!(doc.region(Region::Recommendations), "");
        assert!(!doc.scroll_locked());
    }

    #[test]
    fn busy_newsletter_disables_button() {
        let idle = rendered(&AppViewModel {
            newsletter: NewsletterView {
                input: "a@b.c".to_string(),
                busy: false,
            },
            ..AppViewModel::default()
        });
        let newsletter = idle.region(Region::Newsletter);
        assert!(newsletter.contains(r#"value="a@b.c""#));
        assert!(!newsletter.contains("disabled"));

        let busy = rendered(&AppViewModel {
            newsletter: NewsletterView {
                input: String::new(),
                busy: true,
            },
            ..AppViewModel::default()
        });
        let newsletter = busy.region(Region::Newsletter);
        assert!(newsletter.contains("disabled"));
        assert!(newsletter.contains("Subscribing..."));
    }

    #[test]
    fn notifications_use_severity_color_and_escape_text() {
        let view = AppViewModel {
            notifications: vec![
                NotificationView {
                    id: 1,
                    message: "<b>hi</b>".to_string(),
                    severity: NotificationSeverity::Error,
                    leaving: false,
                },
                NotificationView {
                    id: 2,
                    message: "bye".to_string(),
                    severity: NotificationSeverity::Success,
                    leaving: true,
                },
            ],
            ..AppViewModel::default()
        };
        let doc = rendered(&view);
        let html = doc.region(Region::Notifications);
        assert!(html.contains("background:#ff4757"));
        assert!(html.contains("&lt;b&gt;hi&lt;/b&gt;"));
        assert!(html.contains("background:#2ed573"));
        assert!(html.contains("slideOutRight 0.3s ease forwards"));
    }

    #[test]
    fn header_date_is_rendered_when_known() {
        let doc = rendered(&AppViewModel {
            today: Some("Monday, January 15, 2024".to_string()),
            ..AppViewModel::default()
        });
        assert_eq!(doc.region(Region::CurrentDate), "Monday, January 15, 2024");
    }
}
