//! ACK/NACK badges for a pull request's review comments

use std::collections::HashSet;

use acks_core::{escape, Comment, Markup, PullRequest, ReviewDecision};

use super::{avatar, NOWRAP};
use crate::context::{AdminView, RenderContext};
use crate::error::Result;

/// Distinct reviewers needed before the list view shows a total
pub const TOTAL_CAPTION_MIN: usize = 4;

/// Bootstrap label class per decision; `None` means the comment is skipped
fn label_class(decision: ReviewDecision) -> Option<&'static str> {
    match decision {
        ReviewDecision::ConceptAck => Some("label-primary"),
        ReviewDecision::TestedAck => Some("label-success"),
        ReviewDecision::UntestedAck => Some("label-warning"),
        ReviewDecision::Nack => Some("label-danger"),
        ReviewDecision::None => None,
    }
}

/// Darker background for ACKs given on an older commit
fn stale_style(decision: ReviewDecision) -> &'static str {
    match decision {
        ReviewDecision::TestedAck => "background-color: #2d672d;",
        ReviewDecision::UntestedAck => "background-color: #b06d0f;",
        ReviewDecision::ConceptAck | ReviewDecision::Nack | ReviewDecision::None => "",
    }
}

/// A comment is stale when it does not mention the current head commit
fn is_stale(comment: &Comment, last_commit_short_hash: Option<&str>) -> bool {
    match last_commit_short_hash {
        Some(hash) if !hash.is_empty() => !comment.body.contains(hash),
        _ => false,
    }
}

/// First decision per reviewer login, in review order, with its label class
fn kept_decisions(comments: &[Comment]) -> Vec<(&Comment, &'static str)> {
    let mut authors = HashSet::new();
    let mut kept = Vec::new();
    for comment in comments {
        if authors.contains(comment.author.login.as_str()) {
            continue;
        }
        let Some(label) = label_class(comment.review_decision) else {
            continue;
        };
        authors.insert(comment.author.login.as_str());
        kept.push((comment, label));
    }
    kept
}

/// Reviewer badges; the details page adds each comment body
pub fn review_decisions(
    _view: &dyn AdminView,
    ctx: &RenderContext<'_>,
    pull_request: &PullRequest,
    _name: &str,
) -> Result<Markup> {
    let kept = kept_decisions(&pull_request.review_decisions);
    let hash = pull_request.last_commit_short_hash.as_deref();
    let is_details = ctx.is_details();
    let mut output = Markup::empty();

    for (index, (comment, label)) in kept.iter().enumerate() {
        let style = if is_stale(comment, hash) {
            stale_style(comment.review_decision)
        } else {
            ""
        };

        let (outer_style, comment_markup) = if is_details {
            let mut body = format!(
                r#"<div style="color: #000000;"> {}</div>"#,
                escape(&comment.body)
            );
            if index + 1 < kept.len() {
                body.push_str("<hr/>");
            }
            ("", body)
        } else {
            (NOWRAP, String::new())
        };

        output.push_raw(&format!(
            concat!(
                r#"<a target=blank href="{url}" style="color: #FFFFFF; text-decoration: none;">"#,
                r#"<div style="{outer_style}">{avatar}"#,
                r#" <span title="{full_text}" class="label {label}" style="{style}">{login}</span>"#,
                "{comment_markup}</div></a>"
            ),
            url = escape(&comment.url),
            outer_style = outer_style,
            avatar = avatar(&comment.author.avatar_url),
            full_text = escape(&comment.body),
            label = label,
            style = style,
            login = escape(&comment.author.login),
            comment_markup = comment_markup,
        ));
    }

    if kept.len() >= TOTAL_CAPTION_MIN && !is_details {
        output.push_raw(&format!(
            r#"<div class="text-center"><small><em>Total: {}</em></small></div>"#,
            kept.len()
        ));
    }
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RenderMode;
    use crate::test_support::*;

    fn render(pr: &PullRequest, mode: RenderMode) -> String {
        let view = TestView::default();
        review_decisions(&view, &view.context(mode), pr, "review_decisions")
            .unwrap()
            .into_string()
    }

    #[test]
    fn first_decision_per_author_wins() {
        let mut pr = pull_request(1);
        pr.review_decisions = vec![
            comment("C1", user("U2", "alice"), ReviewDecision::Nack, "NACK"),
            comment("C2", user("U2", "alice"), ReviewDecision::TestedAck, "tACK"),
            comment("C3", user("U3", "bob"), ReviewDecision::ConceptAck, "Concept ACK"),
        ];
        let html = render(&pr, RenderMode::List);
        assert_eq!(html.matches("class=\"label ").count(), 2);
        assert!(html.contains(r#"class="label label-danger" style="">alice</span>"#));
        assert!(html.contains(r#"class="label label-primary" style="">bob</span>"#));
        assert!(!html.contains("label-success"));
    }

    #[test]
    fn undecided_comments_do_not_claim_the_author() {
        let mut pr = pull_request(1);
        pr.review_decisions = vec![
            comment("C1", user("U2", "alice"), ReviewDecision::None, "question"),
            comment("C2", user("U2", "alice"), ReviewDecision::UntestedAck, "utACK"),
        ];
        let html = render(&pr, RenderMode::List);
        assert_eq!(html.matches("class=\"label ").count(), 1);
        assert!(html.contains("label-warning"));
    }

    #[test]
    fn stale_tested_ack_gets_overlay() {
        let mut pr = pull_request(1);
        pr.last_commit_short_hash = Some("fa1afe1".to_string());
        pr.review_decisions =
            vec![comment("C1", user("U2", "alice"), ReviewDecision::TestedAck, "tACK 0ddba11")];
        assert!(render(&pr, RenderMode::List).contains(r#"style="background-color: #2d672d;""#));

        pr.review_decisions =
            vec![comment("C1", user("U2", "alice"), ReviewDecision::TestedAck, "tACK fa1afe1")];
        assert!(!render(&pr, RenderMode::List).contains("background-color"));
    }

    #[test]
    fn stale_overlay_only_for_tested_and_untested() {
        let mut pr = pull_request(1);
        pr.last_commit_short_hash = Some("fa1afe1".to_string());
        pr.review_decisions = vec![
            comment("C1", user("U2", "alice"), ReviewDecision::ConceptAck, "Concept ACK"),
            comment("C2", user("U3", "bob"), ReviewDecision::Nack, "NACK"),
            comment("C3", user("U4", "carol"), ReviewDecision::UntestedAck, "utACK"),
        ];
        let html = render(&pr, RenderMode::List);
        assert_eq!(html.matches("background-color").count(), 1);
        assert!(html.contains("background-color: #b06d0f;"));
    }

    #[test]
    fn no_hash_means_nothing_is_stale() {
        let mut pr = pull_request(1);
        pr.last_commit_short_hash = None;
        pr.review_decisions =
            vec![comment("C1", user("U2", "alice"), ReviewDecision::TestedAck, "tACK")];
        assert!(!render(&pr, RenderMode::List).contains("background-color"));
    }

    #[test]
    fn details_show_bodies_with_dividers_between() {
        let mut pr = pull_request(1);
        pr.review_decisions = vec![
            comment("C1", user("U2", "alice"), ReviewDecision::ConceptAck, "Concept ACK"),
            comment("C2", user("U3", "bob"), ReviewDecision::TestedAck, "tested <ok>"),
            comment("C3", user("U4", "carol"), ReviewDecision::None, "trailing question"),
        ];
        let html = render(&pr, RenderMode::Details);
        assert_eq!(html.matches("<hr/>").count(), 1);
        assert!(html.contains(r#"<div style="color: #000000;"> tested &lt;ok&gt;</div></div></a>"#));
        assert!(!html.contains("white-space: nowrap"));
    }

    #[test]
    fn list_total_caption_from_four_reviewers() {
        let mut pr = pull_request(1);
        let logins = ["a", "b", "c", "d"];
        pr.review_decisions = logins
            .iter()
            .enumerate()
            .map(|(i, login)| {
                let author = user(&format!("U{}", i), login);
                comment(&format!("C{}", i), author, ReviewDecision::ConceptAck, "")
            })
            .collect();
        let caption = r#"<div class="text-center"><small><em>Total: 4</em></small></div>"#;
        assert!(render(&pr, RenderMode::List).ends_with(caption));
        assert!(!render(&pr, RenderMode::Details).contains("Total:"));

        pr.review_decisions.pop();
        assert!(!render(&pr, RenderMode::List).contains("Total:"));
    }

    #[test]
    fn rendering_is_repeatable() {
        let mut pr = pull_request(1);
        pr.review_decisions =
            vec![comment("C1", user("U2", "alice"), ReviewDecision::TestedAck, "tACK")];
        assert_eq!(render(&pr, RenderMode::Details), render(&pr, RenderMode::Details));
    }
}
