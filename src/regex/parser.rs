use crate::regex::ast::Token;
use crate::regex::error::SyntaxError;

// Counters saved for an enclosing group while a nested one is open.
#[derive(Debug, Clone, Copy)]
struct Frame {
    pending_alternations: usize,
    pending_atoms: usize,
}

/// Converts an infix pattern to postfix, inserting explicit concatenation.
///
/// `pending_atoms` counts operands of the current branch that are not yet
/// joined; concatenation is emitted lazily, only when a third operand shows
/// up or the branch is closed. `pending_alternations` counts finished
/// branches of the current group.
pub fn parse(pattern: &str) -> Result<Vec<Token>, SyntaxError> {
    let mut postfix = Vec::with_capacity(pattern.len() * 2);
    let mut frames: Vec<Frame> = Vec::new();
    let mut pending_atoms = 0usize;
    let mut pending_alternations = 0usize;

    for (pos, c) in pattern.chars().enumerate() {
        match c {
            '(' => {
                if pending_atoms > 1 {
                    pending_atoms -= 1;
                    postfix.push(Token::Concat);
                }
                frames.push(Frame {
                    pending_alternations,
                    pending_atoms,
                });
                pending_alternations = 0;
                pending_atoms = 0;
            }
            '|' => {
                if pending_atoms == 0 {
                    return Err(SyntaxError::EmptyAlternative { pos });
                }
                join_branch(&mut postfix, pending_atoms);
                pending_alternations += 1;
                pending_atoms = 0;
            }
            ')' => {
                let Some(frame) = frames.pop() else {
                    return Err(SyntaxError::UnmatchedClose { pos });
                };
                if pending_atoms == 0 {
                    return Err(SyntaxError::EmptyGroupBranch { pos });
                }
                close_scope(&mut postfix, pending_atoms, pending_alternations);
                pending_alternations = frame.pending_alternations;
                // the whole group is one operand of the enclosing branch
                pending_atoms = frame.pending_atoms + 1;
            }
            '*' | '+' | '?' => {
                if pending_atoms == 0 {
                    return Err(SyntaxError::NothingToRepeat { op: c, pos });
                }
                if let Some(token) = Token::repetition(c) {
                    postfix.push(token);
                }
            }
            _ => {
                if pending_atoms > 1 {
                    pending_atoms -= 1;
                    postfix.push(Token::Concat);
                }
                postfix.push(Token::Literal(c));
                pending_atoms += 1;
            }
        }
    }

    if !frames.is_empty() {
        return Err(SyntaxError::UnclosedGroup { open: frames.len() });
    }
    if pending_atoms == 0 && pending_alternations > 0 {
        return Err(SyntaxError::TrailingAlternative);
    }
    // Same flush as `)`, but nothing encloses the top level so there is no
    // operand to hand back.
    close_scope(&mut postfix, pending_atoms, pending_alternations);

    Ok(postfix)
}

// Reduces the operands of a branch to a single value.
fn join_branch(postfix: &mut Vec<Token>, pending_atoms: usize) {
    for _ in 1..pending_atoms {
        postfix.push(Token::Concat);
    }
}

fn close_scope(postfix: &mut Vec<Token>, pending_atoms: usize, pending_alternations: usize) {
    join_branch(postfix, pending_atoms);
    for _ in 0..pending_alternations {
        postfix.push(Token::Alternate);
    }
}
