use sqlconv::{
    NamingStrategy, SNAKE_ACRONYM_NAME_STRATEGY, SNAKE_NAME_STRATEGY, name_strategy,
    set_name_strategy, snake_case_active,
};

// All assertions touching the process-wide strategy cell live in this one
// test function so parallel test threads cannot race it.
#[test]
fn name_strategy_selects_the_converter_process_wide() {
    // Default before anyone sets it.
    assert_eq!(name_strategy(), NamingStrategy::Snake);
    assert_eq!(snake_case_active("XxYY"), "xx_y_y");

    // The acronym identifier activates the boundary-aware converter.
    set_name_strategy(SNAKE_ACRONYM_NAME_STRATEGY);
    assert_eq!(name_strategy(), NamingStrategy::SnakeAcronym);
    assert_eq!(snake_case_active("XxYY"), "xx_yy");
    assert_eq!(snake_case_active("HTTPServer"), "http_server");

    // Switching back is a straightforward overwrite.
    set_name_strategy(SNAKE_NAME_STRATEGY);
    assert_eq!(name_strategy(), NamingStrategy::Snake);
    assert_eq!(snake_case_active("XxYY"), "xx_y_y");

    // An unrecognized identifier resets to the default, even from the
    // acronym strategy, and signals no error.
    set_name_strategy(SNAKE_ACRONYM_NAME_STRATEGY);
    set_name_strategy("no_such_strategy");
    assert_eq!(name_strategy(), NamingStrategy::Snake);
    assert_eq!(snake_case_active("XxYY"), "xx_y_y");
}
