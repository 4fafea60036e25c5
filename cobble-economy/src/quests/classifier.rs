use super::catalog::QuestType;

/// Face emoji counted by the emoji quest, one code point each.
pub const FACE_EMOJI: &str = "😀😁😂🤣😃😄😅😆😉😊😋😎😍😘🥰😗😙😚☺🙂🤗🤩🤔🤨😐😑😶🙄😏😣😥😮🤐😯😪😫🥱😴😌😛😜😝🤤😒😓😔😕🙃🤑😲☹🙁😖😞😟😤😢😭😦😧😨😩🤯😬😰😱🥵🥶😳🤪😵😡😠🤬😷🤒🤕🤢🤮🤧😇🤠🤡🤥🤫🤭🧐🤓";

/// Reactions that count towards the positive reaction quest.
pub const POSITIVE_REACTIONS: &[&str] = &["❤️", "❤", "👍", "💖", "💕", "💗"];

const LONG_MESSAGE_CHARS: usize = 100;
const MEDIUM_MESSAGE_CHARS: usize = 50;
const SHORT_MESSAGE_CHARS: usize = 20;
const EARLY_BIRD_BEFORE_HOUR: u32 = 8;
const NIGHT_OWL_FROM_HOUR: u32 = 22;

/// Normalized view of a chat message as seen by the classifier.
#[derive(Clone, Debug)]
pub struct MessageFeatures<'a> {
    pub raw: &'a str,
    pub lowered: String,
    /// Mentioned users not yet seen today.
    pub new_mentions: u64,
    /// 1 when this channel was not yet used today.
    pub new_channels: u64,
    pub local_hour: u32,
}

impl<'a> MessageFeatures<'a> {
    pub fn new(raw: &'a str, new_mentions: u64, new_channels: u64, local_hour: u32) -> Self {
        Self {
            raw,
            lowered: raw.to_lowercase(),
            new_mentions,
            new_channels,
            local_hour,
        }
    }

    fn char_len(&self) -> usize {
        self.raw.chars().count()
    }
}

#[derive(Clone, Debug)]
pub enum QuestEvent<'a> {
    Message(MessageFeatures<'a>),
    Reaction { symbol: &'a str },
    Command(QuestType),
}

/// Substring keywords for the keyword-driven quest types.
pub fn keywords(quest_type: QuestType) -> Option<&'static [&'static str]> {
    let words: &'static [&'static str] = match quest_type {
        QuestType::Greeting => &["hi", "hello", "hey"],
        QuestType::Gg => &["gg"],
        QuestType::Laugh => &["lol", "lmao", "haha", "hehe"],
        QuestType::Thanks => &["thanks", "thank you", "thx", "ty"],
        QuestType::Welcome => &["welcome"],
        QuestType::Minecraft => &["minecraft"],
        QuestType::Build => &["build", "building"],
        QuestType::Mine => &["mine", "mining"],
        QuestType::Fight => &["pvp", "fight", "fighting"],
        QuestType::Trade => &["trade", "trading"],
        QuestType::Explore => &["explore", "adventure"],
        QuestType::Craft => &["craft", "crafting"],
        QuestType::Farm => &["farm", "farming"],
        QuestType::Positive => &[
            "awesome",
            "great",
            "nice",
            "good",
            "amazing",
            "fantastic",
            "wonderful",
            "excellent",
            "perfect",
            "lovely",
        ],
        _ => return None,
    };

    Some(words)
}

/// How far `event` advances a quest of `quest_type`. For forced types the
/// result is the value progress should be set to, or 0 to leave it alone.
pub fn advances(quest_type: QuestType, event: &QuestEvent<'_>) -> u64 {
    match event {
        QuestEvent::Message(message) => advances_message(quest_type, message),
        QuestEvent::Reaction { symbol } => match quest_type {
            QuestType::Reaction => 1,
            QuestType::PositiveReaction => u64::from(POSITIVE_REACTIONS.contains(symbol)),
            _ => 0,
        },
        QuestEvent::Command(command) => u64::from(*command == quest_type && quest_type.is_command()),
    }
}

fn advances_message(quest_type: QuestType, message: &MessageFeatures<'_>) -> u64 {
    if let Some(words) = keywords(quest_type) {
        return u64::from(words.iter().any(|word| message.lowered.contains(word)));
    }

    let hit = match quest_type {
        QuestType::Chat => true,
        QuestType::Mention => return message.new_mentions,
        QuestType::DifferentChannels => return message.new_channels,
        QuestType::Emoji => {
            return message
                .raw
                .chars()
                .filter(|ch| FACE_EMOJI.contains(*ch))
                .count() as u64;
        }
        QuestType::Question => message.raw.contains('?'),
        QuestType::Exclamation => message.raw.contains('!'),
        QuestType::LongMessage => message.char_len() >= LONG_MESSAGE_CHARS,
        QuestType::MediumMessage => {
            (MEDIUM_MESSAGE_CHARS..LONG_MESSAGE_CHARS).contains(&message.char_len())
        }
        QuestType::ShortMessage => message.char_len() < SHORT_MESSAGE_CHARS,
        QuestType::Links => message.raw.contains("http://") || message.raw.contains("https://"),
        QuestType::EarlyBird => message.local_hour < EARLY_BIRD_BEFORE_HOUR,
        QuestType::NightOwl => message.local_hour >= NIGHT_OWL_FROM_HOUR,
        QuestType::Reaction
        | QuestType::PositiveReaction
        | QuestType::Help
        | QuestType::Balance
        | QuestType::Leaderboard
        | QuestType::CheckQuest
        | QuestType::ServerInfo
        | QuestType::Coinflip
        | QuestType::Gamble
        | QuestType::WinCoinflip => false,
        QuestType::Greeting
        | QuestType::Gg
        | QuestType::Laugh
        | QuestType::Thanks
        | QuestType::Welcome
        | QuestType::Minecraft
        | QuestType::Build
        | QuestType::Mine
        | QuestType::Fight
        | QuestType::Trade
        | QuestType::Explore
        | QuestType::Craft
        | QuestType::Farm
        | QuestType::Positive => false,
    };

    u64::from(hit)
}

#[cfg(test)]
mod tests {
    use super::{FACE_EMOJI, MessageFeatures, QuestEvent, advances};
    use crate::quests::catalog::QuestType;

    fn message(raw: &str) -> QuestEvent<'_> {
        QuestEvent::Message(MessageFeatures::new(raw, 0, 0, 12))
    }

    #[test]
    fn every_message_counts_for_chat() {
        assert_eq!(advances(QuestType::Chat, &message("")), 1);
        assert_eq!(advances(QuestType::Chat, &message("anything")), 1);
    }

    #[test]
    fn keywords_match_case_insensitive_substrings() {
        assert_eq!(advances(QuestType::Greeting, &message("HELLO there")), 1);
        assert_eq!(advances(QuestType::Greeting, &message("this counts")), 1);
        assert_eq!(advances(QuestType::Greeting, &message("nope")), 0);
        assert_eq!(advances(QuestType::Fight, &message("anyone up for PvP?")), 1);
        assert_eq!(advances(QuestType::Positive, &message("that build is Awesome")), 1);
        assert_eq!(advances(QuestType::Minecraft, &message("mine craft")), 0);
    }

    #[test]
    fn counts_each_face_emoji() {
        assert_eq!(advances(QuestType::Emoji, &message("😀 hi 😂😂 🎉")), 3);
        assert_eq!(advances(QuestType::Emoji, &message("no faces")), 0);
        assert!(FACE_EMOJI.chars().count() > 75);
    }

    #[test]
    fn punctuation_and_links() {
        assert_eq!(advances(QuestType::Question, &message("what?")), 1);
        assert_eq!(advances(QuestType::Exclamation, &message("what?")), 0);
        assert_eq!(advances(QuestType::Exclamation, &message("yes!!")), 1);
        assert_eq!(advances(QuestType::Links, &message("see https://example.com")), 1);
        assert_eq!(advances(QuestType::Links, &message("see example.com")), 0);
    }

    #[test]
    fn message_length_bands() {
        let short = "a".repeat(19);
        let medium = "a".repeat(50);
        let long = "é".repeat(100);

        assert_eq!(advances(QuestType::ShortMessage, &message(&short)), 1);
        assert_eq!(advances(QuestType::ShortMessage, &message(&medium)), 0);
        assert_eq!(advances(QuestType::MediumMessage, &message(&medium)), 1);
        assert_eq!(advances(QuestType::MediumMessage, &message(&long)), 0);
        assert_eq!(advances(QuestType::LongMessage, &message(&long)), 1);
        assert_eq!(advances(QuestType::LongMessage, &message(&medium)), 0);
    }

    #[test]
    fn time_of_day_quests_follow_local_hour() {
        let dawn = QuestEvent::Message(MessageFeatures::new("morning", 0, 0, 3));
        let noon = QuestEvent::Message(MessageFeatures::new("afternoon", 0, 0, 14));
        let late = QuestEvent::Message(MessageFeatures::new("night", 0, 0, 22));

        assert_eq!(advances(QuestType::EarlyBird, &dawn), 1);
        assert_eq!(advances(QuestType::EarlyBird, &noon), 0);
        assert_eq!(advances(QuestType::NightOwl, &noon), 0);
        assert_eq!(advances(QuestType::NightOwl, &late), 1);
    }

    #[test]
    fn distinct_counters_pass_through() {
        let event = QuestEvent::Message(MessageFeatures::new("<@1> <@2>", 2, 1, 12));
        assert_eq!(advances(QuestType::Mention, &event), 2);
        assert_eq!(advances(QuestType::DifferentChannels, &event), 1);
    }

    #[test]
    fn reactions_only_feed_reaction_quests() {
        let heart = QuestEvent::Reaction { symbol: "❤️" };
        let skull = QuestEvent::Reaction { symbol: "💀" };

        assert_eq!(advances(QuestType::Reaction, &skull), 1);
        assert_eq!(advances(QuestType::PositiveReaction, &heart), 1);
        assert_eq!(advances(QuestType::PositiveReaction, &skull), 0);
        assert_eq!(advances(QuestType::Chat, &heart), 0);
    }

    #[test]
    fn commands_only_feed_their_own_type() {
        let event = QuestEvent::Command(QuestType::Balance);
        assert_eq!(advances(QuestType::Balance, &event), 1);
        assert_eq!(advances(QuestType::Leaderboard, &event), 0);
        assert_eq!(advances(QuestType::Chat, &event), 0);
        assert_eq!(advances(QuestType::Balance, &message("a balance")), 0);
    }
}
