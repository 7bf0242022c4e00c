pub(crate) use crate::bitset::Set;
pub(crate) use crate::board::positions::{Block, Cell, Col, House, Line, Position, Row};
pub(crate) use crate::board::Digit;
pub(crate) use crate::strategy::board::Board;
