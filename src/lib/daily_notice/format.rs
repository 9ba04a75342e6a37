//! Literal markers of the text notice. The composer writes them and the parser
//! matches on them, so both sides must only ever use these constants.

pub const BULLET: &str = "・";

pub const TITLE: &str = "📅乐知班明日温馨提醒";
pub const DATE_MARKER: &str = "⏰";

pub const WEATHER_EMOJI: &str = "🌤️";
pub const WEATHER_HEADER: &str = "明日天气：";

pub const COURSES_HEADER: &str = "📚明日课程安排：";
pub const MORNING_LABEL: &str = "上午：";
pub const AFTERNOON_LABEL: &str = "下午：";
pub const NO_COURSES: &str = "明日无课程安排";
/// Between two bracketed course names: `[a], [b]`
pub const COURSE_SEPARATOR: &str = "], [";

pub const CLUBS_HEADER: &str = "🎨社团课程安排：";
pub const CLUB_SUFFIX: &str = "小组：";
pub const NO_CLUBS: &str = "明日无社团活动";

pub const DUTY_HEADER: &str = "🧹值日生安排：";
pub const NO_DUTY: &str = "明日无值日生安排";
pub const DUTY_SEPARATORS: [char; 3] = ['、', '，', ','];
pub const LEADER_MARKER: &str = "[组长]";

pub const DRESS_HEADER: &str = "👔着装提醒：";
pub const UNIFORM_REMINDER: &str = "❗️明天是星期一，大家穿校服，戴红领巾。";
pub const COMFORTABLE_CLOTHING: &str = "干净舒适即可";

pub const NOTES_HEADER: &str = "❗📢特别注意事项：";

pub const CLOSING_HEADER: &str = "📌其他注意事项";
/// Every line that opens a section, the weather header aside since it
/// carries a variable emoji.
pub const SECTION_HEADERS: [&str; 6] = [
    COURSES_HEADER,
    CLUBS_HEADER,
    DUTY_HEADER,
    DRESS_HEADER,
    NOTES_HEADER,
    CLOSING_HEADER,
];
pub const CLOSING_LINES: [&str; 2] = [
    "1.请带好明天所需的学习用品和课本",
    "2.注意休息，保证充足睡眠，准时到校",
];
