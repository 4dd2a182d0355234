//! Conversation state and question sequencing for advisory calls
//!
//! State is an explicit, externally-owned value passed into each step; there
//! is no ambient session. Question flows are a fixed sequence of nodes with an
//! optional next pointer.

use serde::{Deserialize, Serialize};

/// One answered question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationEntry {
    /// Identifier of the question this answers
    pub question_id: String,

    /// Free-text answer
    pub answer: String,
}

/// Ordered collection of (question id, answer) pairs.
///
/// Re-answering a question updates it in place, keeping its original position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Conversation {
    entries: Vec<ConversationEntry>,
}

impl Conversation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer, preserving first-answered order
    pub fn record(&mut self, question_id: impl Into<String>, answer: impl Into<String>) {
        let question_id = question_id.into();
        let answer = answer.into();
        if let Some(entry) = self
            .entries
            .iter_mut()
            .find(|e| e.question_id == question_id)
        {
            entry.answer = answer;
        } else {
            self.entries.push(ConversationEntry {
                question_id,
                answer,
            });
        }
    }

    /// Look up the answer to a question, if any
    pub fn answer(&self, question_id: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.question_id == question_id)
            .map(|e| e.answer.as_str())
    }

    pub fn entries(&self) -> &[ConversationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A single question in a flow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionNode {
    /// Stable identifier recorded in the conversation
    pub id: String,

    /// Prompt shown to the user
    pub prompt: String,

    /// Index of the next node, if any
    pub next: Option<usize>,
}

/// A fixed sequence of questions linked by next pointers
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionFlow {
    nodes: Vec<QuestionNode>,
}

impl QuestionFlow {
    pub fn from_nodes(nodes: Vec<QuestionNode>) -> Self {
        Self { nodes }
    }

    /// The business-planning interview: idea, goals, market, competitors
    pub fn business_planning() -> Self {
        let prompts = [
            ("idea", "Describe the business idea in a sentence or two."),
            ("goal", "State the goals (annual revenue, customer targets)."),
            ("market", "Describe the target market (size, growth)."),
            ("competitors", "List the main competitors."),
        ];
        let count = prompts.len();
        let nodes = prompts
            .iter()
            .enumerate()
            .map(|(i, (id, prompt))| QuestionNode {
                id: (*id).to_string(),
                prompt: (*prompt).to_string(),
                next: if i + 1 < count { Some(i + 1) } else { None },
            })
            .collect();
        Self { nodes }
    }

    /// First question of the flow, if the flow is non-empty
    pub fn first(&self) -> Option<&QuestionNode> {
        self.nodes.first()
    }

    pub fn nodes(&self) -> &[QuestionNode] {
        &self.nodes
    }

    /// Walk the flow from the first node, following next pointers.
    ///
    /// Each node is visited at most once, so a malformed cycle terminates
    /// instead of looping.
    pub fn walk(&self) -> Vec<&QuestionNode> {
        let mut visited = vec![false; self.nodes.len()];
        let mut sequence = Vec::new();
        let mut cursor = if self.nodes.is_empty() { None } else { Some(0) };

        while let Some(index) = cursor {
            if index >= self.nodes.len() || visited[index] {
                break;
            }
            visited[index] = true;
            let node = &self.nodes[index];
            sequence.push(node);
            cursor = node.next;
        }
        sequence
    }

    /// Next unanswered question given the conversation so far
    pub fn next_unanswered(&self, conversation: &Conversation) -> Option<&QuestionNode> {
        self.walk()
            .into_iter()
            .find(|node| conversation.answer(&node.id).is_none())
    }
}
