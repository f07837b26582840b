use std::io::{self, BufRead, Write};

use crate::decode::decode_payload;
use crate::error::ClientError;
use crate::gateway::Gateway;

/// Which remote verb a menu entry dispatches through.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verb {
    Evaluate,
    Submit,
}

/// One row of the fixed operation menu.
///
/// `prompts` are shown to the operator in order; `call_order` maps prompt
/// positions onto remote argument positions, for the entries whose contract
/// signature does not match the operator-facing prompt order.
#[derive(Debug)]
pub struct MenuEntry {
    pub key: &'static str,
    pub label: &'static str,
    pub operation: &'static str,
    pub verb: Verb,
    pub prompts: &'static [&'static str],
    pub call_order: &'static [usize],
}

/// Entering this at the menu ends the loop.
pub const EXIT_CHOICE: &str = "0";

pub const MENU: &[MenuEntry] = &[
    MenuEntry {
        key: "1",
        label: "GetAllAssets",
        operation: "GetAllAssets",
        verb: Verb::Evaluate,
        prompts: &[],
        call_order: &[],
    },
    MenuEntry {
        key: "2",
        label: "GetAllOwners",
        operation: "GetAllOwners",
        verb: Verb::Evaluate,
        prompts: &[],
        call_order: &[],
    },
    MenuEntry {
        key: "3",
        label: "TransferAsset",
        operation: "TransferAsset",
        verb: Verb::Submit,
        prompts: &["AssetId", "NewOwnerId", "BuyWithFailure"],
        call_order: &[0, 1, 2],
    },
    MenuEntry {
        key: "4",
        label: "ChangeColor",
        operation: "ChangeColor",
        verb: Verb::Submit,
        prompts: &["AssetId", "Color"],
        call_order: &[0, 1],
    },
    MenuEntry {
        key: "5",
        label: "CreateFailure",
        operation: "CreateFailure",
        verb: Verb::Submit,
        prompts: &["AssetId", "Failure name", "Price"],
        call_order: &[0, 1, 2],
    },
    MenuEntry {
        key: "6",
        label: "RepairFailures",
        operation: "RepairFailures",
        verb: Verb::Submit,
        prompts: &["AssetId"],
        call_order: &[0],
    },
    MenuEntry {
        key: "7",
        label: "FindColor",
        operation: "FindColor",
        verb: Verb::Evaluate,
        prompts: &["Color"],
        call_order: &[0],
    },
    MenuEntry {
        key: "8",
        label: "FindOwner",
        operation: "FindOwner",
        verb: Verb::Evaluate,
        prompts: &["OwnerId"],
        call_order: &[0],
    },
    // The operator is asked for the owner first, but the contract takes
    // (color, ownerId).
    MenuEntry {
        key: "9",
        label: "FindColorOwner",
        operation: "FindOwnerColor",
        verb: Verb::Evaluate,
        prompts: &["OwnerId", "Color"],
        call_order: &[1, 0],
    },
];

impl MenuEntry {
    pub fn find(choice: &str) -> Result<&'static MenuEntry, ClientError> {
        MENU.iter()
            .find(|entry| entry.key == choice)
            .ok_or_else(|| ClientError::InvalidChoice(choice.to_owned()))
    }

    /// Reorder the collected answers into remote calling order.
    pub fn call_args(&self, answers: &[String]) -> Vec<String> {
        self.call_order
            .iter()
            .map(|&position| answers[position].clone())
            .collect()
    }
}

/// The interactive loop: one command at a time, each fully resolved (printed
/// result or printed failure) before the next prompt. Per-command failures
/// never escape; only operator-stream I/O errors do.
pub async fn run<G, R, W>(gateway: &G, mut input: R, mut output: W) -> io::Result<()>
where
    G: Gateway + ?Sized,
    R: BufRead,
    W: Write,
{
    let menu = render_menu();
    loop {
        output.write_all(menu.as_bytes())?;
        output.flush()?;

        let Some(line) = read_line(&mut input)? else {
            break;
        };
        let choice = line.trim();
        if choice == EXIT_CHOICE {
            break;
        }
        let entry = match MenuEntry::find(choice) {
            Ok(entry) => entry,
            Err(err) => {
                writeln!(output, "{err}")?;
                continue;
            }
        };

        let mut answers = Vec::with_capacity(entry.prompts.len());
        for prompt in entry.prompts {
            write!(output, "{prompt}: ")?;
            output.flush()?;
            match read_line(&mut input)? {
                Some(answer) => answers.push(answer.trim().to_owned()),
                None => return Ok(()),
            }
        }

        let args = entry.call_args(&answers);
        let outcome = match entry.verb {
            Verb::Evaluate => gateway.evaluate(entry.operation, &args).await,
            Verb::Submit => gateway.submit(entry.operation, &args).await,
        };
        report(&mut output, entry, outcome)?;
    }
    Ok(())
}

fn render_menu() -> String {
    let mut menu = String::from("\n");
    for entry in MENU {
        menu.push_str(&format!(" {}.) {}\n", entry.key, entry.label));
    }
    menu.push_str(" 0.) Exit\nChoose an option: ");
    menu
}

fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn report<W: Write>(
    output: &mut W,
    entry: &MenuEntry,
    outcome: Result<Vec<u8>, ClientError>,
) -> io::Result<()> {
    let payload = match outcome {
        Ok(payload) => payload,
        Err(err) => {
            error!("{} failed: {err}", entry.operation);
            return writeln!(output, "*** Error: {err}");
        }
    };
    match decode_payload(&payload) {
        Ok(Some(value)) => {
            let pretty =
                serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());
            writeln!(output, "*** Result:\n{pretty}")
        }
        Ok(None) => match entry.verb {
            Verb::Submit => writeln!(output, "*** Transaction committed successfully"),
            Verb::Evaluate => writeln!(output, "*** Result: <empty>"),
        },
        Err(ClientError::MalformedResponse { raw }) => {
            warn!("{} returned an undecodable payload", entry.operation);
            writeln!(
                output,
                "*** Error: response payload is not valid JSON; raw payload follows"
            )?;
            writeln!(output, "{raw}")
        }
        Err(err) => writeln!(output, "*** Error: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn menu_keys_are_unique_and_cover_1_through_9() {
        let keys: HashSet<&str> = MENU.iter().map(|entry| entry.key).collect();
        assert_eq!(keys.len(), MENU.len());
        for key in 1..=9 {
            assert!(keys.contains(key.to_string().as_str()));
        }
        assert!(!keys.contains(EXIT_CHOICE));
    }

    #[test]
    fn call_order_is_a_permutation_of_the_prompts() {
        for entry in MENU {
            assert_eq!(
                entry.call_order.len(),
                entry.prompts.len(),
                "entry {}",
                entry.key
            );
            let mut seen: Vec<usize> = entry.call_order.to_vec();
            seen.sort_unstable();
            assert_eq!(seen, (0..entry.prompts.len()).collect::<Vec<_>>());
        }
    }

    #[test]
    fn read_verbs_and_write_verbs_are_assigned_correctly() {
        for entry in MENU {
            let expected = match entry.key {
                "3" | "4" | "5" | "6" => Verb::Submit,
                _ => Verb::Evaluate,
            };
            assert_eq!(entry.verb, expected, "entry {}", entry.key);
        }
    }

    #[test]
    fn find_rejects_unknown_choices() {
        assert!(MenuEntry::find("1").is_ok());
        let err = MenuEntry::find("17").unwrap_err();
        assert!(matches!(err, ClientError::InvalidChoice(choice) if choice == "17"));
    }

    #[test]
    fn owner_color_lookup_swaps_prompt_order_into_calling_order() {
        let entry = MenuEntry::find("9").unwrap();
        let answers = vec!["owner5".to_owned(), "red".to_owned()];
        assert_eq!(entry.call_args(&answers), vec!["red", "owner5"]);
    }
}
