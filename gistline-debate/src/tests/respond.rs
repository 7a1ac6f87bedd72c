use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::{
    classify_and_respond, ConversationMessage, DebateConfig, DebateResponder, ResponseTemplates,
    APOLOGY_RESPONSE, EMPTY_MESSAGE_PROMPT,
};

/// Always yields zero, so every uniform pick lands on the first template.
struct FirstPick;

impl RngCore for FirstPick {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }
}

#[test]
fn factual_question_lists_all_terms() {
    let reply = classify_and_respond(
        "Carbon pricing",
        "How do carbon taxes affect carbon markets?",
        &[],
        &mut FirstPick,
    );
    assert!(
        reply.starts_with(
            "Regarding carbon, taxes, affect in the context of \"Carbon pricing\": This is a multifaceted issue."
        ),
        "{}",
        reply
    );
}

#[test]
fn opinion_chains_terms_with_and() {
    let reply = classify_and_respond(
        "Carbon pricing",
        "I believe carbon taxes work.",
        &[],
        &mut FirstPick,
    );
    assert!(
        reply.starts_with("I appreciate your perspective on believe and carbon and taxes."),
        "{}",
        reply
    );
}

#[test]
fn analytical_mentions_first_two_terms() {
    let reply = classify_and_respond(
        "Energy",
        "Nuclear energy reduces emissions.",
        &[],
        &mut FirstPick,
    );
    assert!(
        reply.starts_with(
            "Your point about nuclear and energy adds an important dimension to our discussion of \"Energy\"."
        ),
        "{}",
        reply
    );
}

#[test]
fn missing_terms_use_placeholder_phrase() {
    let reply = classify_and_respond("Energy", "Yes, it is so.", &[], &mut FirstPick);
    assert!(reply.starts_with("Your point about this point adds"), "{}", reply);
}

#[test]
fn blank_message_asks_for_input() {
    let mut rng = StdRng::seed_from_u64(3);
    assert_eq!(classify_and_respond("Energy", "", &[], &mut rng), EMPTY_MESSAGE_PROMPT);
    assert_eq!(classify_and_respond("Energy", "  \n\t", &[], &mut rng), EMPTY_MESSAGE_PROMPT);
}

#[test]
fn same_seed_is_reproducible() {
    let history = vec![ConversationMessage::user("Ada", "Nuclear is safe.")];
    let message = "Why do people fear nuclear power?";

    let first = classify_and_respond("Energy", message, &history, &mut StdRng::seed_from_u64(99));
    let second = classify_and_respond("Energy", message, &history, &mut StdRng::seed_from_u64(99));
    assert_eq!(first, second);
}

#[test]
fn history_does_not_change_reply() {
    let message = "I think storage matters most.";
    let history = vec![
        ConversationMessage::system("Room created"),
        ConversationMessage::user("Ada", "Batteries are getting cheaper."),
    ];

    let without = classify_and_respond("Energy", message, &[], &mut StdRng::seed_from_u64(5));
    let with = classify_and_respond("Energy", message, &history, &mut StdRng::seed_from_u64(5));
    assert_eq!(without, with);
}

#[test]
fn empty_template_pool_falls_back_to_apology() {
    let config = DebateConfig::default().with_templates(ResponseTemplates {
        analytical: Vec::new(),
        ..ResponseTemplates::default()
    });
    let responder = DebateResponder::new(&config);

    let reply = responder.respond(
        "Energy",
        "Nuclear energy reduces emissions.",
        &[],
        &mut FirstPick,
    );
    assert_eq!(reply, APOLOGY_RESPONSE);

    // other categories still compose normally
    let reply = responder.respond("Energy", "I feel hopeful.", &[], &mut FirstPick);
    assert_ne!(reply, APOLOGY_RESPONSE);
}

#[test]
fn custom_templates_and_term_count() {
    let config = DebateConfig::default()
        .with_key_term_count(1)
        .with_templates(ResponseTemplates {
            factual: vec!["[{topic}] {terms}?".to_string()],
            ..ResponseTemplates::default()
        });
    let responder = DebateResponder::new(&config);

    let reply = responder.respond(
        "Grid",
        "When will solar panels beat coal?",
        &[],
        &mut StdRng::seed_from_u64(0),
    );
    assert_eq!(reply, "[Grid] solar?");
}
