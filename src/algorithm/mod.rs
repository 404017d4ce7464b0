/// Availability bitset over the tile arena
pub mod bitset;
/// Greedy grid-fill search
pub mod assembly;
/// Edge matching and corner detection
pub mod matching;
/// End-to-end orchestration of both answers
pub mod solver;
