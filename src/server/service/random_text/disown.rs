//! Flavor text for the disown command.

use super::{choose, TextArgs};

const VALID_TARGET: &[&str] = &[
    "Oof, {target}, {instigator} doesn't seem to want you any more...",
    "Well, {instigator}, say goodbye to {target}.",
    "Might be good news for you, {target}, but you're finally free of {instigator}.",
    "One child down, the rest to go.",
    "A sad day when a parent disowns their child...",
    "I'm sure this is very emotional for you. I'm sorry for your loss.",
    "One less problem for you to deal with.",
    "They're just out to get some cigarettes and milk, I'm sure they'll be back soon.",
    "I guess they got the winning lottery numbers, huh?",
];

const INSTIGATOR_IS_UNQUALIFIED: &[&str] = &[
    "They aren't your child...",
    "Have you considered disowning someone who's *actually* your child?",
    "Strangely enough you can only disown *your* children.",
    "Are you confusing that person for your child?",
];

pub struct DisownRandomText;

impl DisownRandomText {
    /// Text for a successful disown.
    pub fn valid_target(args: TextArgs<'_>) -> String {
        choose(VALID_TARGET, args).unwrap_or_default()
    }

    /// Text for trying to disown someone who is not your child.
    pub fn instigator_is_unqualified(args: TextArgs<'_>) -> String {
        choose(INSTIGATOR_IS_UNQUALIFIED, args).unwrap_or_default()
    }
}
