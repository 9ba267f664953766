// Prompt text for content recommendations.

/// Replace `{interest}` before sending. The example bullets double as the
/// format the extractor looks for.
pub const RECOMMEND_PROMPT_TEMPLATE: &str = "The user is interested in \"{interest}\". \
Suggest three YouTube videos or Qiita articles that would help a university student \
start learning this field. List each link as a bullet with a short description. Example:
- [Video title](URL): description
- [Article title](URL): description";

pub fn build_recommend_prompt(interest: &str) -> String {
    RECOMMEND_PROMPT_TEMPLATE.replace("{interest}", interest)
}
