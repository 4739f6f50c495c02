//! Randomized flavor text.
//!
//! Templates reference the people involved in a command with `{instigator}` and
//! `{target}` placeholders. A template is only eligible when every person it mentions
//! was supplied, so the same pool serves calls with and without a target.

pub mod disown;

use rand::seq::IndexedRandom;
use serenity::all::{Mentionable, User};

const INSTIGATOR: &str = "instigator";
const TARGET: &str = "target";

/// The people a piece of flavor text may mention.
#[derive(Clone, Copy, Default)]
pub struct TextArgs<'a> {
    pub instigator: Option<&'a User>,
    pub target: Option<&'a User>,
}

impl<'a> TextArgs<'a> {
    pub fn new(instigator: Option<&'a User>, target: Option<&'a User>) -> Self {
        Self { instigator, target }
    }

    /// Names of the placeholders these arguments can fill.
    fn supplied(&self) -> Vec<&'static str> {
        let mut supplied = Vec::new();
        if self.instigator.is_some() {
            supplied.push(INSTIGATOR);
        }
        if self.target.is_some() {
            supplied.push(TARGET);
        }
        supplied
    }
}

/// Placeholder names referenced by a template, in order of appearance.
fn placeholders(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        let after = &rest[start + 1..];
        let Some(end) = after.find('}') else {
            break;
        };
        names.push(&after[..end]);
        rest = &after[end + 1..];
    }

    names
}

/// Templates whose placeholders are all among `supplied`.
pub fn valid_templates<'t>(templates: &[&'t str], supplied: &[&str]) -> Vec<&'t str> {
    templates
        .iter()
        .copied()
        .filter(|template| {
            placeholders(template)
                .iter()
                .all(|name| supplied.contains(name))
        })
        .collect()
}

/// Fills a template's placeholders with user mentions.
pub fn render(template: &str, args: TextArgs<'_>) -> String {
    let mut text = template.to_string();

    if let Some(instigator) = args.instigator {
        text = text.replace("{instigator}", &instigator.mention().to_string());
    }
    if let Some(target) = args.target {
        text = text.replace("{target}", &target.mention().to_string());
    }

    text
}

/// Picks a random eligible template and renders it.
///
/// # Returns
/// - `Some(String)` - Rendered text
/// - `None` - No template is eligible for the supplied arguments
pub fn choose(templates: &[&str], args: TextArgs<'_>) -> Option<String> {
    let valid = valid_templates(templates, &args.supplied());

    valid
        .choose(&mut rand::rng())
        .map(|template| render(template, args))
}
