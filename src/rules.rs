//! Player-facing rules text.

/// How to play, for a presentation layer to show on request.
pub const INSTRUCTIONS: &str = "\
Flip 7 - How to Play

1. Setup: 3 to 18 players, each starting every round with an empty hand.
2. Turns: on your turn either Hit (draw a card) or Stay (stop and keep your round score).
3. Cards:
   - Number cards (0-12) add their value.
   - Modifiers add +2, +4, +6, +8 or +10, and x2 doubles the total.
   - Freeze: pick any player still in the round (yourself included); they lose their next turn.
   - Flip Three: pick any player still in the round; they draw three cards one at a time.
     A bust or a seventh unique number stops the draws early.
   - Second Chance: keep it. If you draw a duplicate number, the duplicate and the
     Second Chance are discarded together and you stay in the round.
4. Bust: drawing a duplicate number without a Second Chance scores 0 for the round.
5. 7 Unique: holding seven different numbers scores +15 and ends your round.
6. Round end: the round ends once every player has stayed, busted or hit 7 Unique.
7. Winning: play rounds until someone reaches 200 points. If several do in the
   same round, the highest score wins.
";
