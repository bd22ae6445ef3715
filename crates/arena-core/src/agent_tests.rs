use super::*;

#[test]
fn test_assignment_is_consistent() {
    let assignment = ColorAssignment::from_coin(true);
    assert_eq!(assignment.agent_on(Side::White), AgentId::A);
    assert_eq!(assignment.agent_on(Side::Black), AgentId::B);
    assert_eq!(assignment.side_of(AgentId::A), Side::White);
    assert_eq!(assignment.side_of(AgentId::B), Side::Black);

    let flipped = ColorAssignment::from_coin(false);
    assert_eq!(flipped.agent_on(Side::White), AgentId::B);
    assert_eq!(flipped.side_of(AgentId::A), Side::Black);
}

#[test]
fn test_roster_round_trip() {
    let roster = Roster::new("ChatGPT", "Gemini");
    assert_eq!(roster.name(AgentId::A), "ChatGPT");
    assert_eq!(roster.id_of("Gemini"), Some(AgentId::B));
    assert_eq!(roster.id_of("Stockfish"), None);
}

#[test]
fn test_side_from_color() {
    assert_eq!(Side::from(chess::Color::White), Side::White);
    assert_eq!(Side::Black.to_color(), chess::Color::Black);
    assert_eq!(Side::Black.to_string(), "Black");
}
