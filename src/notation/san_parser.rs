//! Standard Algebraic Notation parsing and candidate resolution.
//!
//! Grammar: `[KQRBN]? (file | rank | file rank)? x? file rank (=[QRBN])?
//! [+#]?`, case-insensitive on piece and promotion letters, plus the exact
//! castling literals `O-O` / `0-0` and `O-O-O` / `0-0-0`. A leading letter
//! that could name a piece is tried as one first and re-read as a
//! disambiguation token only if the remainder fails to parse, so `bxc4`
//! reads as a bishop capture, matching the original engine's grammar.
//!
//! Resolution finds every piece of the side to move that could legally and
//! king-safely perform the parsed move; anything other than exactly one
//! candidate is an error the player can act on.

use crate::board::grid::Board;
use crate::board::piece::{PieceColor, PieceKind};
use crate::board::position::Position;
use crate::errors::ChessError;
use crate::rules::check_detection::would_expose_check;
use crate::rules::move_validator::is_legal_move;

/// Extra source constraint parsed from the move text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disambiguation {
    /// Source file, as a column index.
    File(i8),
    /// Source rank, as a row index.
    Rank(i8),
    /// Exact source square.
    Square(Position),
}

/// A move as written, before candidate resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedMove {
    pub kind: PieceKind,
    pub disambiguation: Option<Disambiguation>,
    pub is_capture: bool,
    pub target: Position,
    pub promotion: Option<PieceKind>,
}

/// What a piece of move text asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMoveRequest {
    Castle { kingside: bool },
    Piece(ParsedMove),
}

/// A fully resolved move ready for the commit pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedMove {
    pub from: Position,
    pub to: Position,
    pub promotion: Option<PieceKind>,
}

/// Parse move text into a request, without consulting the board.
pub fn parse_text_move(input: &str) -> Result<TextMoveRequest, ChessError> {
    match input {
        "O-O" | "0-0" => return Ok(TextMoveRequest::Castle { kingside: true }),
        "O-O-O" | "0-0-0" => return Ok(TextMoveRequest::Castle { kingside: false }),
        _ => {}
    }
    parse_piece_move(input).map(TextMoveRequest::Piece)
}

fn parse_piece_move(input: &str) -> Result<ParsedMove, ChessError> {
    let parse_error = || ChessError::ParseError(input.to_owned());
    let mut chars: &[u8] = input.as_bytes();

    // Optional check/checkmate suffix, ignored for resolution.
    if let [head @ .., b'+' | b'#'] = chars {
        chars = head;
    }

    // Optional promotion suffix.
    let mut promotion = None;
    if chars.len() >= 2 && chars[chars.len() - 2] == b'=' {
        let letter = chars[chars.len() - 1] as char;
        if !matches!(letter.to_ascii_uppercase(), 'Q' | 'R' | 'B' | 'N') {
            return Err(parse_error());
        }
        promotion = Some(PieceKind::from_san_letter(letter));
        chars = &chars[..chars.len() - 2];
    }

    // Mandatory destination square.
    if chars.len() < 2 {
        return Err(parse_error());
    }
    let (head, target_bytes) = chars.split_at(chars.len() - 2);
    let file = parse_file(target_bytes[0]).ok_or_else(parse_error)?;
    let row = parse_rank_row(target_bytes[1]).ok_or_else(parse_error)?;
    let target = Position::new(row, file)?;

    // Optional capture marker.
    let mut head = head;
    let mut is_capture = false;
    if let [rest @ .., b'x' | b'X'] = head {
        is_capture = true;
        head = rest;
    }

    // Optional piece letter, then optional disambiguation. A leading letter
    // that could be a piece is preferred as one; fall back to reading it as
    // a disambiguation token if the rest does not parse.
    let (kind, disambiguation) = match head.first() {
        Some(&first) if is_piece_letter(first) => {
            if let Some(disambiguation) = parse_disambiguation(&head[1..]) {
                (PieceKind::from_san_letter(first as char), disambiguation)
            } else if let Some(disambiguation) = parse_disambiguation(head) {
                (PieceKind::Pawn, disambiguation)
            } else {
                return Err(parse_error());
            }
        }
        _ => match parse_disambiguation(head) {
            Some(disambiguation) => (PieceKind::Pawn, disambiguation),
            None => return Err(parse_error()),
        },
    };

    Ok(ParsedMove {
        kind,
        disambiguation,
        is_capture,
        target,
        promotion,
    })
}

fn is_piece_letter(byte: u8) -> bool {
    matches!(byte.to_ascii_uppercase(), b'K' | b'Q' | b'R' | b'B' | b'N')
}

fn parse_file(byte: u8) -> Option<i8> {
    let lower = byte.to_ascii_lowercase();
    (b'a'..=b'h').contains(&lower).then(|| (lower - b'a') as i8)
}

fn parse_rank_row(byte: u8) -> Option<i8> {
    (b'1'..=b'8').contains(&byte).then(|| 8 - (byte - b'0') as i8)
}

/// `None` means the bytes are not a valid disambiguation token;
/// `Some(None)` means there is no token at all.
fn parse_disambiguation(bytes: &[u8]) -> Option<Option<Disambiguation>> {
    match bytes {
        [] => Some(None),
        [single] => {
            if let Some(file) = parse_file(*single) {
                Some(Some(Disambiguation::File(file)))
            } else {
                parse_rank_row(*single).map(|row| Some(Disambiguation::Rank(row)))
            }
        }
        [file_byte, rank_byte] => {
            let file = parse_file(*file_byte)?;
            let row = parse_rank_row(*rank_byte)?;
            let square = Position::new(row, file).ok()?;
            Some(Some(Disambiguation::Square(square)))
        }
        _ => None,
    }
}

/// Parse and resolve a textual move for the side to move. The winner is the
/// unique candidate that passes both ordinary legality and king safety.
pub fn resolve_text_move(
    board: &Board,
    player: PieceColor,
    input: &str,
) -> Result<ResolvedMove, ChessError> {
    match parse_text_move(input)? {
        TextMoveRequest::Castle { kingside } => resolve_castling(board, player, kingside),
        TextMoveRequest::Piece(parsed) => resolve_piece_move(board, player, input, &parsed),
    }
}

fn resolve_castling(
    board: &Board,
    player: PieceColor,
    kingside: bool,
) -> Result<ResolvedMove, ChessError> {
    let row = player.home_row();
    let from = Position::new(row, 4)?;
    let king_at_home = board
        .piece_at(from)
        .is_some_and(|piece| piece.kind == PieceKind::King && piece.color == player);
    if !king_at_home {
        return Err(ChessError::IllegalMove("illegal castling move".to_owned()));
    }

    let to = Position::new(row, if kingside { 6 } else { 2 })?;
    if is_legal_move(board, from, to) && !would_expose_check(board, from, to) {
        Ok(ResolvedMove {
            from,
            to,
            promotion: None,
        })
    } else {
        Err(ChessError::IllegalMove("illegal castling move".to_owned()))
    }
}

fn resolve_piece_move(
    board: &Board,
    player: PieceColor,
    input: &str,
    parsed: &ParsedMove,
) -> Result<ResolvedMove, ChessError> {
    let mut candidates = Vec::new();

    for (square, piece) in board.occupied() {
        if piece.color != player || piece.kind != parsed.kind {
            continue;
        }
        let matches_disambiguation = match parsed.disambiguation {
            None => true,
            Some(Disambiguation::File(file)) => square.column() == file,
            Some(Disambiguation::Rank(row)) => square.row() == row,
            Some(Disambiguation::Square(exact)) => square == exact,
        };
        if !matches_disambiguation {
            continue;
        }
        if is_legal_move(board, square, parsed.target)
            && !would_expose_check(board, square, parsed.target)
        {
            candidates.push(square);
        }
    }

    match candidates.as_slice() {
        [] => Err(ChessError::IllegalMove(format!(
            "no {:?} can reach {}",
            parsed.kind,
            parsed.target.notation()
        ))),
        [from] => Ok(ResolvedMove {
            from: *from,
            to: parsed.target,
            promotion: parsed.promotion,
        }),
        _ => Err(ChessError::AmbiguousMove(input.to_owned())),
    }
}
