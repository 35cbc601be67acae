extern crate corne_keymap;

#[macro_export]
macro_rules! key_sequence_test {
    (keyboard: $keyboard:expr, sequence: [$([$row:expr, $col:expr, $pressed:expr]),* $(,)?], expected_actions: [$($action:expr),* $(,)?]) => {
        {
            let mut keyboard = $keyboard;
            let sequence = vec![
                $(
                    $crate::common::TestKeyPress {
                        row: $row,
                        col: $col,
                        pressed: $pressed,
                    },
                )*
            ];
            let expected_actions = vec![$($action),*];

            $crate::common::run_key_sequence_test(&mut keyboard, &sequence, &expected_actions);
            keyboard
        }
    };
}
