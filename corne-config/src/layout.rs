use std::collections::HashMap;

use corne_types::action::{EncoderAction, KeyAction};
use pest::Parser;
use pest_derive::Parser;

use crate::action_parser::parse_key;
use crate::error::{ConfigError, ConfigResult};
use crate::validation::Validator;
use crate::{KeyboardTomlConfig, LayoutConfig};

// Pest parser using the grammar files
#[derive(Parser)]
#[grammar = "keymap.pest"]
struct ConfigParser;

// Max alias resolution depth to prevent infinite loops
const MAX_ALIAS_RESOLUTION_DEPTH: usize = 10;

impl KeyboardTomlConfig {
    /// Parse `[layout]`, `[aliases]` and `[[layer]]` into a validated keymap.
    ///
    /// Layers which aren't defined, and matrix positions which aren't listed in `layout.matrix_map`, are `No`.
    pub fn get_layout_config(&self) -> ConfigResult<LayoutConfig> {
        let aliases = self.aliases.clone().unwrap_or_default();
        let layers = self.layer.clone().unwrap_or_default();
        let layout = self.layout.clone().ok_or(ConfigError::MissingField {
            field: "layout".to_string(),
        })?;
        Validator::validate_aliases(&aliases)?;

        let matrix_map = layout.matrix_map.as_deref().ok_or(ConfigError::MissingField {
            field: "layout.matrix_map".to_string(),
        })?;
        // Build the mapping between the configuration sequence of keys and the electronic grid
        let sequence_to_grid = Self::parse_matrix_map(matrix_map)?;
        let mut grid_to_sequence: Vec<Vec<Option<usize>>> = vec![vec![None; layout.cols as usize]; layout.rows as usize];
        for (sequence_number, (row, col)) in sequence_to_grid.iter().enumerate() {
            if *row >= layout.rows || *col >= layout.cols {
                return Err(ConfigError::InvalidMatrixMap {
                    message: format!(
                        "Coordinate ({},{}) is out of bounds: ([0..{}], [0..{}]) is the expected range",
                        row,
                        col,
                        layout.rows.saturating_sub(1),
                        layout.cols.saturating_sub(1)
                    ),
                });
            }
            let cell = &mut grid_to_sequence[*row as usize][*col as usize];
            if cell.is_some() {
                return Err(ConfigError::InvalidMatrixMap {
                    message: format!("Duplicate coordinate ({},{})", row, col),
                });
            }
            *cell = Some(sequence_number);
        }

        if layers.len() > layout.layers as usize {
            return Err(ConfigError::TooManyLayers {
                found: layers.len(),
                max: layout.layers as usize,
            });
        }

        // Collect layer names first, so that layers can reference the layers defined after them
        let mut layer_names = HashMap::<String, u32>::new();
        for (layer_number, layer) in layers.iter().enumerate() {
            if let Some(name) = &layer.name {
                if layer_names.contains_key(name) {
                    return Err(ConfigError::DuplicateLayerName { name: name.clone() });
                }
                layer_names.insert(name.clone(), layer_number as u32);
            }
        }

        let mut keymap = Vec::with_capacity(layout.layers as usize);
        let mut encoder_map = Vec::with_capacity(layout.layers as usize);
        let mut num_encoder: Option<usize> = None;
        for (layer_number, layer) in layers.iter().enumerate() {
            // The number and order of keys should match the matrix map
            let key_action_sequence = Self::keymap_parser(&layer.keys, &aliases, &layer_names)?;
            if key_action_sequence.len() > sequence_to_grid.len() {
                return Err(ConfigError::TooManyKeys {
                    layer: layer_number,
                    max: sequence_to_grid.len(),
                });
            }
            let mut grid = vec![vec![KeyAction::No; layout.cols as usize]; layout.rows as usize];
            for (sequence_number, key) in key_action_sequence.iter().enumerate() {
                let (row, col) = sequence_to_grid[sequence_number];
                grid[row as usize][col as usize] = parse_key(key)?;
            }
            keymap.push(grid);

            if let Some(encoders) = &layer.encoders {
                match num_encoder {
                    Some(expected) if expected != encoders.len() => {
                        return Err(ConfigError::EncoderCountMismatch {
                            layer: layer_number,
                            expected,
                            found: encoders.len(),
                        });
                    }
                    _ => num_encoder = Some(encoders.len()),
                }
                let mut bindings = Vec::with_capacity(encoders.len());
                for [clockwise, counter_clockwise] in encoders {
                    bindings.push(EncoderAction::new(
                        Self::encoder_key_parser(clockwise, &aliases, &layer_names)?,
                        Self::encoder_key_parser(counter_clockwise, &aliases, &layer_names)?,
                    ));
                }
                encoder_map.push(Some(bindings));
            } else {
                encoder_map.push(None);
            }
        }

        // The required number of layers is less than what's set in keymap, fill the rest with empty keys
        for _ in keymap.len()..layout.layers as usize {
            keymap.push(vec![vec![KeyAction::No; layout.cols as usize]; layout.rows as usize]);
            encoder_map.push(None);
        }
        // A layer which binds no encoder does nothing on rotation
        let num_encoder = num_encoder.unwrap_or(0);
        let encoder_map = encoder_map
            .into_iter()
            .map(|bindings| bindings.unwrap_or_else(|| vec![EncoderAction::default(); num_encoder]))
            .collect();

        let layout_config = LayoutConfig {
            rows: layout.rows,
            cols: layout.cols,
            layers: layout.layers,
            keymap,
            encoder_map,
        };
        Validator::validate_layout(&layout_config)?;

        Ok(layout_config)
    }

    /// Parses and validates a matrix_map string using Pest.
    /// Ensures the string contains only valid coordinates and whitespace.
    fn parse_matrix_map(matrix_map: &str) -> ConfigResult<Vec<(u8, u8)>> {
        let pairs = ConfigParser::parse(Rule::matrix_map, matrix_map).map_err(|e| ConfigError::InvalidMatrixMap {
            message: format!("Invalid layout.matrix_map format: {}", e),
        })?;
        let mut coordinates = Vec::new();
        // The top-level pair is 'matrix_map'. We need to iterate its inner content.
        for pair in pairs.filter(|pair| pair.as_rule() == Rule::matrix_map) {
            for inner_pair in pair.into_inner() {
                match inner_pair.as_rule() {
                    Rule::coordinate => {
                        let mut coord_parts = inner_pair.into_inner(); // Should contain two 'number' pairs
                        let row = Self::parse_coordinate(coord_parts.next())?;
                        let col = Self::parse_coordinate(coord_parts.next())?;
                        coordinates.push((row, col));
                    }
                    Rule::EOI => {
                        // Ignore End Of Input marker
                    }
                    rule => {
                        return Err(ConfigError::InvalidMatrixMap {
                            message: format!("Unexpected rule encountered: {:?}", rule),
                        });
                    }
                }
            }
        }
        Ok(coordinates)
    }

    fn parse_coordinate(pair: Option<pest::iterators::Pair<Rule>>) -> ConfigResult<u8> {
        let number = pair
            .ok_or(ConfigError::InvalidMatrixMap {
                message: "Missing coordinate".to_string(),
            })?
            .as_str();
        number.parse::<u8>().map_err(|e| ConfigError::InvalidMatrixMap {
            message: format!("Failed to parse coordinate '{}': {}", number, e),
        })
    }

    /// Replace every `@alias` with its definition, until no alias is left
    fn alias_resolver(keys: &str, aliases: &HashMap<String, String>) -> ConfigResult<String> {
        let mut current_keys = keys.to_string();

        let mut iterations = 0;

        loop {
            let mut next_keys = String::with_capacity(current_keys.capacity());
            let mut made_replacement = false;
            let mut last_index = 0; // Keep track of where we are in current_keys

            while let Some(at_index) = current_keys[last_index..].find('@') {
                let start_index = last_index + at_index;

                // Append the text before the '@'
                next_keys.push_str(&current_keys[last_index..start_index]);

                // An alias starts with '@' followed by a non whitespace
                match current_keys.as_bytes().get(start_index + 1) {
                    Some(first_char) if !first_char.is_ascii_whitespace() => {
                        // Find the end of the alias identifier
                        let mut end_index = start_index + 2;
                        while let Some(c) = current_keys.as_bytes().get(end_index) {
                            if c.is_ascii_whitespace() {
                                break;
                            }
                            end_index += 1;
                        }

                        let alias_key = &current_keys[start_index + 1..end_index];
                        match aliases.get(alias_key) {
                            Some(value) => {
                                next_keys.push_str(value);
                                made_replacement = true;
                            }
                            None => {
                                return Err(ConfigError::UndefinedAlias {
                                    alias: alias_key.to_string(),
                                });
                            }
                        }
                        last_index = end_index;
                    }
                    _ => {
                        // Treat '@' literally
                        next_keys.push('@');
                        last_index = start_index + 1;
                    }
                }
            }

            // Append any remaining part of the string after the last '@' or if no '@' was found
            next_keys.push_str(&current_keys[last_index..]);

            if !made_replacement {
                break;
            }

            iterations += 1;
            if iterations >= MAX_ALIAS_RESOLUTION_DEPTH {
                // Show original keys for context
                return Err(ConfigError::AliasDepthExceeded { keys: keys.to_string() });
            }

            current_keys = next_keys;
        }

        Ok(current_keys)
    }

    fn layer_name_resolver(
        prefix: &str,
        pair: pest::iterators::Pair<Rule>,
        layer_names: &HashMap<String, u32>,
    ) -> ConfigResult<String> {
        let mut action = prefix.to_string() + "(";

        for inner_pair in pair.into_inner() {
            match inner_pair.as_rule() {
                Rule::layer_name => {
                    let layer_name = inner_pair.as_str();
                    match layer_names.get(layer_name) {
                        Some(layer_number) => action += layer_number.to_string().as_str(),
                        None => {
                            return Err(ConfigError::UnknownLayerName {
                                name: layer_name.to_string(),
                            });
                        }
                    }
                }
                _ => action += inner_pair.as_str(),
            }
        }
        action += ")";

        Ok(action)
    }

    /// Split the keys of a layer into key strings, with aliases and layer names resolved
    fn keymap_parser(
        layer_keys: &str,
        aliases: &HashMap<String, String>,
        layer_names: &HashMap<String, u32>,
    ) -> ConfigResult<Vec<String>> {
        // Resolve aliases first
        let layer_keys = Self::alias_resolver(layer_keys, aliases)?;

        let pairs = ConfigParser::parse(Rule::key_map, &layer_keys).map_err(|e| ConfigError::InvalidKey {
            key: layer_keys.clone(),
            message: format!("Invalid keymap format: {}", e),
        })?;

        let mut key_action_sequence = Vec::new();
        for pair in pairs.filter(|pair| pair.as_rule() == Rule::key_map) {
            for inner_pair in pair.into_inner() {
                match inner_pair.as_rule() {
                    Rule::no_action
                    | Rule::transparent_action
                    | Rule::simple_keycode
                    | Rule::shifted_action
                    | Rule::wm_action => key_action_sequence.push(inner_pair.as_str().to_string()),

                    // Layer actions
                    Rule::mo_action => key_action_sequence.push(Self::layer_name_resolver("MO", inner_pair, layer_names)?),
                    Rule::tg_action => key_action_sequence.push(Self::layer_name_resolver("TG", inner_pair, layer_names)?),
                    Rule::to_action => key_action_sequence.push(Self::layer_name_resolver("TO", inner_pair, layer_names)?),
                    Rule::df_action => key_action_sequence.push(Self::layer_name_resolver("DF", inner_pair, layer_names)?),

                    Rule::EOI => {
                        // Ignore End of input marker
                    }
                    rule => {
                        return Err(ConfigError::InvalidKey {
                            key: inner_pair.as_str().to_string(),
                            message: format!("Unexpected rule encountered during layer.keys processing: {:?}", rule),
                        });
                    }
                }
            }
        }

        Ok(key_action_sequence)
    }

    /// An encoder binding holds exactly one key
    fn encoder_key_parser(
        key: &str,
        aliases: &HashMap<String, String>,
        layer_names: &HashMap<String, u32>,
    ) -> ConfigResult<KeyAction> {
        match Self::keymap_parser(key, aliases, layer_names)?.as_slice() {
            [single] => parse_key(single),
            _ => Err(ConfigError::InvalidKey {
                key: key.to_string(),
                message: "an encoder direction must be bound to exactly one key".to_string(),
            }),
        }
    }
}
