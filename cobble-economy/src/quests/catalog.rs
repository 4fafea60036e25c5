use rand::Rng;
use rand::seq::index::sample;

/// Number of quests handed out per user per day.
pub const DAILY_QUEST_COUNT: usize = 5;

/// What kind of activity advances a quest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QuestType {
    Chat,
    Greeting,
    Mention,
    Emoji,
    Reaction,
    EarlyBird,
    NightOwl,
    Question,
    Exclamation,
    Gg,
    Laugh,
    Help,
    Coinflip,
    Gamble,
    WinCoinflip,
    LongMessage,
    DifferentChannels,
    ServerInfo,
    Balance,
    Leaderboard,
    CheckQuest,
    Thanks,
    Welcome,
    Minecraft,
    Build,
    Mine,
    Fight,
    Trade,
    Explore,
    Craft,
    Farm,
    Positive,
    Links,
    ShortMessage,
    MediumMessage,
    PositiveReaction,
}

impl QuestType {
    pub const ALL: [QuestType; 36] = [
        QuestType::Chat,
        QuestType::Greeting,
        QuestType::Mention,
        QuestType::Emoji,
        QuestType::Reaction,
        QuestType::EarlyBird,
        QuestType::NightOwl,
        QuestType::Question,
        QuestType::Exclamation,
        QuestType::Gg,
        QuestType::Laugh,
        QuestType::Help,
        QuestType::Coinflip,
        QuestType::Gamble,
        QuestType::WinCoinflip,
        QuestType::LongMessage,
        QuestType::DifferentChannels,
        QuestType::ServerInfo,
        QuestType::Balance,
        QuestType::Leaderboard,
        QuestType::CheckQuest,
        QuestType::Thanks,
        QuestType::Welcome,
        QuestType::Minecraft,
        QuestType::Build,
        QuestType::Mine,
        QuestType::Fight,
        QuestType::Trade,
        QuestType::Explore,
        QuestType::Craft,
        QuestType::Farm,
        QuestType::Positive,
        QuestType::Links,
        QuestType::ShortMessage,
        QuestType::MediumMessage,
        QuestType::PositiveReaction,
    ];

    pub fn tag(self) -> &'static str {
        match self {
            QuestType::Chat => "chat",
            QuestType::Greeting => "greeting",
            QuestType::Mention => "mention",
            QuestType::Emoji => "emoji",
            QuestType::Reaction => "reaction",
            QuestType::EarlyBird => "early_bird",
            QuestType::NightOwl => "night_owl",
            QuestType::Question => "question",
            QuestType::Exclamation => "exclamation",
            QuestType::Gg => "gg",
            QuestType::Laugh => "laugh",
            QuestType::Help => "help",
            QuestType::Coinflip => "coinflip",
            QuestType::Gamble => "gamble",
            QuestType::WinCoinflip => "win_coinflip",
            QuestType::LongMessage => "long_message",
            QuestType::DifferentChannels => "different_channels",
            QuestType::ServerInfo => "server_info",
            QuestType::Balance => "balance",
            QuestType::Leaderboard => "leaderboard",
            QuestType::CheckQuest => "check_quest",
            QuestType::Thanks => "thanks",
            QuestType::Welcome => "welcome",
            QuestType::Minecraft => "minecraft",
            QuestType::Build => "build",
            QuestType::Mine => "mine",
            QuestType::Fight => "fight",
            QuestType::Trade => "trade",
            QuestType::Explore => "explore",
            QuestType::Craft => "craft",
            QuestType::Farm => "farm",
            QuestType::Positive => "positive",
            QuestType::Links => "links",
            QuestType::ShortMessage => "short_message",
            QuestType::MediumMessage => "medium_message",
            QuestType::PositiveReaction => "positive_reaction",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|quest_type| quest_type.tag() == tag)
    }

    /// Types whose progress is set to a fixed value instead of accumulated.
    pub fn is_forced(self) -> bool {
        matches!(self, QuestType::EarlyBird | QuestType::NightOwl)
    }

    /// Types advanced by running a bot command rather than by chat content.
    pub fn is_command(self) -> bool {
        matches!(
            self,
            QuestType::Help
                | QuestType::Balance
                | QuestType::Leaderboard
                | QuestType::CheckQuest
                | QuestType::ServerInfo
                | QuestType::Coinflip
                | QuestType::Gamble
                | QuestType::WinCoinflip
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuestDefinition {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
    pub quest_type: QuestType,
    pub target: u64,
    pub reward: i64,
    pub emoji: &'static str,
}

const fn quest(
    id: u32,
    name: &'static str,
    description: &'static str,
    quest_type: QuestType,
    target: u64,
    reward: i64,
    emoji: &'static str,
) -> QuestDefinition {
    QuestDefinition {
        id,
        name,
        description,
        quest_type,
        target,
        reward,
        emoji,
    }
}

pub static CATALOG: [QuestDefinition; 40] = [
    quest(1, "Chatterbox I", "Send 50 messages", QuestType::Chat, 50, 100, "💬"),
    quest(2, "Chatterbox II", "Send 100 messages", QuestType::Chat, 100, 250, "💬"),
    quest(3, "Chatterbox III", "Send 200 messages", QuestType::Chat, 200, 500, "💬"),
    quest(4, "Friendly Greeter", "Say 'hi' or 'hello' 10 times", QuestType::Greeting, 10, 75, "👋"),
    quest(5, "Social Butterfly", "Mention 2 different people", QuestType::Mention, 2, 50, "🦋"),
    quest(6, "Popular", "Mention 5 different people", QuestType::Mention, 5, 150, "⭐"),
    quest(7, "Emoji Master", "Use 20 emojis in messages", QuestType::Emoji, 20, 100, "😀"),
    quest(8, "Reactor", "React to 10 messages", QuestType::Reaction, 10, 80, "👍"),
    quest(9, "Early Bird", "Send a message before 8 AM", QuestType::EarlyBird, 1, 200, "🌅"),
    quest(10, "Night Owl", "Send a message after 10 PM", QuestType::NightOwl, 1, 200, "🦉"),
    quest(11, "Question Mark", "Ask 5 questions (messages with ?)", QuestType::Question, 5, 100, "❓"),
    quest(12, "Exclamation!", "Send 10 excited messages (with !)", QuestType::Exclamation, 10, 100, "❗"),
    quest(13, "GG", "Say 'gg' 5 times", QuestType::Gg, 5, 75, "🎮"),
    quest(14, "LOL", "Say 'lol' or laugh 10 times", QuestType::Laugh, 10, 80, "😂"),
    quest(15, "Helpful Helper", "Use the help command 3 times", QuestType::Help, 3, 50, "🆘"),
    quest(16, "Gambler", "Use coinflip 5 times", QuestType::Coinflip, 5, 150, "🪙"),
    quest(17, "Risk Taker", "Use gamble 3 times", QuestType::Gamble, 3, 200, "🎰"),
    quest(18, "Lucky Streak", "Win 3 coinflips", QuestType::WinCoinflip, 3, 300, "🍀"),
    quest(19, "Long Message", "Send a message with 100+ characters", QuestType::LongMessage, 1, 100, "📝"),
    quest(20, "Conversation Starter", "Send 10 messages in different channels", QuestType::DifferentChannels, 10, 150, "💭"),
    quest(21, "Server Booster", "Check server info", QuestType::ServerInfo, 1, 50, "🚀"),
    quest(22, "Balance Checker", "Check your balance 5 times", QuestType::Balance, 5, 75, "💰"),
    quest(23, "Leaderboard Viewer", "Check leaderboard 3 times", QuestType::Leaderboard, 3, 100, "🏆"),
    quest(24, "Quest Hunter", "Check your quests 3 times", QuestType::CheckQuest, 3, 80, "📋"),
    quest(25, "Thanker", "Say 'thanks' or 'thank you' 5 times", QuestType::Thanks, 5, 100, "🙏"),
    quest(26, "Welcomer", "Say 'welcome' 3 times", QuestType::Welcome, 3, 75, "🎉"),
    quest(27, "Minecraft Fan", "Mention 'minecraft' 5 times", QuestType::Minecraft, 5, 150, "⛏️"),
    quest(28, "Builder", "Say 'build' or 'building' 3 times", QuestType::Build, 3, 100, "🏗️"),
    quest(29, "Miner", "Say 'mine' or 'mining' 5 times", QuestType::Mine, 5, 120, "⚒️"),
    quest(30, "Fighter", "Say 'pvp' or 'fight' 3 times", QuestType::Fight, 3, 100, "⚔️"),
    quest(31, "Trader", "Say 'trade' or 'trading' 3 times", QuestType::Trade, 3, 100, "💱"),
    quest(32, "Explorer", "Say 'explore' or 'adventure' 3 times", QuestType::Explore, 3, 125, "🗺️"),
    quest(33, "Crafter", "Say 'craft' or 'crafting' 5 times", QuestType::Craft, 5, 100, "🔨"),
    quest(34, "Farmer", "Say 'farm' or 'farming' 5 times", QuestType::Farm, 5, 100, "🌾"),
    quest(35, "Talkative", "Send 30 messages in one day", QuestType::Chat, 30, 150, "🗣️"),
    quest(36, "Friendly", "Use 10 positive words (awesome, great, nice, etc.)", QuestType::Positive, 10, 100, "😊"),
    quest(37, "Link Sharer", "Share 3 links", QuestType::Links, 3, 75, "🔗"),
    quest(38, "Punctual", "Send 5 short messages (under 20 characters)", QuestType::ShortMessage, 5, 80, "⚡"),
    quest(39, "Informative", "Send 3 messages with 50+ characters", QuestType::MediumMessage, 3, 90, "📚"),
    quest(40, "Support Team", "React with ❤️ or 👍 5 times", QuestType::PositiveReaction, 5, 100, "💝"),
];

pub fn quest_by_id(quest_id: u32) -> Option<&'static QuestDefinition> {
    CATALOG.iter().find(|quest| quest.id == quest_id)
}

/// Draw a fresh daily assignment: distinct catalog ids, no replacement.
pub fn draw_daily_quests<R: Rng + ?Sized>(rng: &mut R) -> Vec<u32> {
    let count = DAILY_QUEST_COUNT.min(CATALOG.len());
    sample(rng, CATALOG.len(), count)
        .into_iter()
        .map(|index| CATALOG[index].id)
        .collect()
}
