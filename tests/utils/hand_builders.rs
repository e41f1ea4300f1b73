// ============================================================================
// Hand Creation Macro
// ============================================================================

#[macro_export]
macro_rules! hand {
    ($($rank:ident $suit:ident),* $(,)?) => {
        pokerhands::Hand::new(&[
            $(pokerhands::Card::new(pokerhands::Rank::$rank, pokerhands::Suit::$suit)),*
        ])
        .expect("hand! needs exactly five cards")
    };
}
