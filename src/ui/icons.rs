pub struct Icons;

impl Icons {
    pub const SCALES: &str = "⚖️";
    pub const CHECK: &str = "✅";
    pub const CROSS: &str = "❌";
    pub const WARN: &str = "⚠️";
    pub const INFO: &str = "ℹ️";
    pub const STATS: &str = "📊";
    pub const DATABASE: &str = "🗄️";
    pub const PERSON: &str = "👤";
    pub const FOLDER: &str = "📁";
    pub const PENCIL: &str = "📝";
    pub const TRASH: &str = "🗑️";
}
