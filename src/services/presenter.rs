use crate::models::{Block, BlockKind, Field, Outcome, Presentation};

pub const REQUIRED_FIELDS_MESSAGE: &str =
    "Please fill in all the required fields (Name, Email, and Question).";
pub const EMPTY_ANSWER_MESSAGE: &str =
    "The agent did not return an answer. Please try rephrasing your question.";

/// Renders an outcome into display blocks. No decisions are made here beyond
/// choosing words for each state.
pub fn present(outcome: &Outcome) -> Presentation {
    let mut blocks = Vec::new();

    match outcome {
        Outcome::ValidationFailed { missing } => {
            blocks.push(Block::text(BlockKind::Error, REQUIRED_FIELDS_MESSAGE));
            if !missing.is_empty() {
                blocks.push(Block::text(
                    BlockKind::Error,
                    format!("Missing: {}", Field::labels(missing)),
                ));
            }
        }
        Outcome::AgentEmpty => {
            blocks.push(Block::text(BlockKind::Warning, EMPTY_ANSWER_MESSAGE));
        }
        Outcome::AgentFailure { cause, detail } => {
            blocks.push(Block::text(
                BlockKind::Error,
                format!("The agent could not answer your question: {cause}"),
            ));
            blocks.push(Block::text(BlockKind::Exception, detail.as_str()));
        }
        Outcome::NotifierError { answer, message } => {
            push_answer(&mut blocks, answer);
            blocks.push(Block::text(
                BlockKind::Error,
                format!("Error from the notification service: {message}"),
            ));
        }
        Outcome::NotifierSuccess {
            answer,
            email,
            booking_id,
            email_status,
            email_warning,
        } => {
            push_answer(&mut blocks, answer);
            blocks.push(Block::text(
                BlockKind::Success,
                format!("Success! Request processed and email sent to {email}."),
            ));
            blocks.push(Block::text(
                BlockKind::Info,
                format!("Reference ID: {booking_id}"),
            ));
            blocks.push(Block::text(
                BlockKind::Info,
                format!("Email Status Code: {email_status}"),
            ));
            if let Some(warning) = email_warning {
                blocks.push(Block::text(
                    BlockKind::Warning,
                    format!("Email Sending Warning: {warning}"),
                ));
            }
        }
        Outcome::NotifierTransportFailure {
            answer,
            status_code,
            payload,
        } => {
            push_answer(&mut blocks, answer);
            blocks.push(Block::text(
                BlockKind::Error,
                format!("Failed to invoke the notification function. Status Code: {status_code}"),
            ));
            blocks.push(Block::json(payload.clone()));
        }
        Outcome::UnexpectedException {
            answer,
            message,
            detail,
        } => {
            if let Some(answer) = answer {
                push_answer(&mut blocks, answer);
            }
            blocks.push(Block::text(
                BlockKind::Error,
                format!("An unexpected error occurred: {message}"),
            ));
            blocks.push(Block::text(BlockKind::Exception, detail.as_str()));
        }
    }

    Presentation {
        outcome: outcome.kind(),
        blocks,
    }
}

fn push_answer(blocks: &mut Vec<Block>, answer: &str) {
    blocks.push(Block::text(BlockKind::Success, "Agent's Answer:"));
    blocks.push(Block::text(BlockKind::Answer, answer));
}
