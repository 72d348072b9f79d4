//! Prompt construction for every generation call site.
//!
//! Pure string formatting over a fixed style guide; none of these functions
//! can fail. Each variant ends with the JSON response schema the extractor
//! expects, so prompt and parser stay in one place.

use std::fmt::Write;

use crate::domain::Post;

/// Style guide prefixed to every post-generation prompt: sample posts in the
/// target voice followed by the structural rules.
const STYLE_GUIDE: &str = r#"Sample 1:
AI isn't coming for your job - it's already here.

I've seen people panic about AI replacing them. I've also seen others completely ignore its impact.

Both reactions miss the point.

Here's what's really happening:

- Creative roles are being enhanced, not replaced
- Some industries face more changes than others
- New positions are emerging daily
- AI is taking over repetitive tasks

I remember when automation hit the manufacturing sector. Workers who adapted thrived. Those who resisted struggled.

The same pattern is happening with AI.

But here's the truth: AI won't replace humans - it will replace humans who don't know how to work with AI.

Don't wait for someone to tell you your role is obsolete.

Because the real question isn't if AI will affect your job - it's how you'll use AI to become better at it.

Sample 2:
So much truth to this.

AI in medicine is changing everything.

We need to embrace it.

Why this matters:

AI helps doctors diagnose diseases faster and more accurately.

Quick and correct diagnoses save lives.

AI can analyze medical data better than humans.

This means better treatment plans for patients.

The future of healthcare is here.

Don't let fear of change stop us from using this incredible tool.

Write a compelling social media post in an engaging and concise format. The post should:

Start with a bold short (max 5 words), thought-provoking statement or question.
Follow with a short transition sentence that builds intrigue.
Present a numbered or bulleted list of key points with brief explanations.
End with a strong conclusion, takeaway, or call to action.
NOTE: HOOK SHOULD NOT BE MORE THAN 5 WORDS AND SHOULD BE SCROLL STOPPING
NOTE: IT MUST SOUND HUMAN NOT LIKE AI
NOTE: THE POST MUST BE LIKE HUMAN WRITING SO NO GIMICKY WORDS OR PHRASES
NOTE: USE NATURAL LANGUAGE MAKE THE POST ENJOYABLE AND HAS ELEMENTS THAT WILL MAKE READERS READ TO THE END
NOTE: ADD SOME PERSONAL CONTEXT / STORY IN THE POST
NOTE: ALSO YOU CAN ASK SOME QUESTIONS TO THE READERS CAUSING THEM TO THINK BUT BE NATURAL
NOTE: THE SECOND LINE OR SENTENCE SHOULD NOT BE TOO LONG MAX 7 WORDS AND SHOULD GRAB ATTENTION"#;

/// Formatting constraints shared by every post-shaped response.
const FORMAT_RULES: &str = r#"NOTE: NO hashtags
NOTE: THE CONTENT SHOULD BE THE POST EACH PARAGRAPH SHOULD BE A <p> TAG AND EACH PARAGRAPH SHOULD HAVE A <br> SPACE BETWEEN THEM
NOTE: only <p> and <br> should be used no other tag
NOTE: MAX LENGTH OF 300 words
ALLOWED TAGS = [P, BR]
NOTE: NO BOLD TAGS <b> or <strong> or any other text formatting tags in the response"#;

const POST_SCHEMA: &str = r#"Return JSON format with these keys:
```json{
    "title": "string",
    "content": "html string only <p> and <br> tags",
    "length": "integer"
}```"#;

/// What a post-generation prompt is built around.
#[derive(Debug, Clone, Copy)]
pub enum SourceMaterial<'a> {
    /// A caller-supplied topic keyword.
    Topic(&'a str),
    /// Extracted web-page text or a video transcript.
    Raw(&'a str),
}

/// Build the instruction string for a new post from a topic or raw source
/// material, with an optional tone.
pub fn post_prompt(source: SourceMaterial<'_>, tone: Option<&str>) -> String {
    let mut prompt = String::new();
    prompt.push_str(STYLE_GUIDE);
    prompt.push_str("\n\n");

    match source {
        SourceMaterial::Topic(topic) => {
            let _ = writeln!(
                prompt,
                "Ensure the tone is authoritative yet conversational. The topic should be \
                 {topic}, and the post should be formatted similarly to the examples provided \
                 also with easy to understand words."
            );
        }
        SourceMaterial::Raw(text) => {
            let _ = writeln!(
                prompt,
                "Ensure the tone is authoritative yet conversational. This is the raw data: \
                 {text}, and the post should be formatted similarly to the examples provided \
                 also with easy to understand words."
            );
        }
    }

    let _ = writeln!(prompt, "Tone: {}", tone.unwrap_or("professional"));
    prompt.push_str(FORMAT_RULES);
    prompt.push_str("\n\n");
    prompt.push_str(POST_SCHEMA);
    prompt
}

/// Build the instruction string for regenerating an existing post while
/// maintaining its core message.
pub fn regenerate_prompt(post: &Post) -> String {
    let mut prompt = String::new();
    prompt.push_str("Improve and regenerate this post while maintaining its core message:\n\n");
    prompt.push_str(STYLE_GUIDE);
    prompt.push_str("\n\n");
    let _ = writeln!(
        prompt,
        "Ensure the tone is authoritative yet conversational. The original Title is {title} \
         original content: {content}, and the post should be formatted similarly to the \
         examples provided also with easy to understand words.",
        title = post.title,
        content = post.content,
    );
    prompt.push_str(FORMAT_RULES);
    prompt.push_str("\n\n");
    prompt.push_str(POST_SCHEMA);
    prompt
}

/// Build the instruction string for an editor-assist rewrite. The response
/// schema carries `content` and `length` only.
pub fn edit_prompt(content: &str, instruction: &str) -> String {
    format!(
        r#"MAKE EDIT TO THIS TEXT: {content}
EDIT: {instruction}
NOTE: IF HAS HTML TAGS IT SHOULD REMAIN THE SAME
NOTE: MAKE SURE THE RESPONSE SOUNDS HUMAN
NOTE: IF THE EDIT IS TO EDIT ONLY A PART ONLY EDIT THAT PART AND GIVE THE WHOLE TEXT WITH THE EDITED PART
NOTE: NO GIMICKS USE EASY TO UNDERSTAND WORDS
NOTE: NO HASHTAGS UNLESS REQUESTED
NOTE: IF ASKED TO RESTRUCTURE THE RESPONSE IN A NICE FORMAT USING <p> and <br> tags only and maybe numberings
NOTE: NO STYLING, NO OTHER TAGS EXCEPT FROM P AND BR AND NO WEIRD FORMATTING JUST TEXT

THE RESPONSE SHOULD BE IN THIS JSON FORMAT
```json{{
    "content": "result here",
    "length": "integer"
}}```"#
    )
}

/// Build the instruction string for three evergreen topic suggestions in a
/// field/sub-field.
pub fn topics_prompt(field: &str, sub_field: &str) -> String {
    format!(
        r#"Generate 3 evergreen content ideas for {field}/{sub_field} that combine timeless value with viral potential. For each idea:
- Focus on fundamental questions/problems people always search
- Include psychological triggers for sharing (curiosity, emotion, surprise)
- Avoid time-sensitive references
- Prioritize titles that work across platforms
- Virality score (50-100) should reflect both shareability and search demand

Response should be in this format:
```json{{
    "topics": [
        {{"name": "title", "virality": 50 - 100}},
        {{"name": "title", "virality": 50 - 100}},
        {{"name": "title", "virality": 50 - 100}}
    ]
}}```"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn topic_prompt_carries_topic_tone_and_schema() {
        let prompt = post_prompt(SourceMaterial::Topic("rust adoption"), Some("casual"));

        assert!(prompt.contains("The topic should be rust adoption"));
        assert!(prompt.contains("Tone: casual"));
        assert!(prompt.contains("ALLOWED TAGS = [P, BR]"));
        assert!(prompt.contains("\"title\": \"string\""));
    }

    #[test]
    fn raw_material_prompt_embeds_source_text() {
        let prompt = post_prompt(SourceMaterial::Raw("transcript text here"), None);

        assert!(prompt.contains("This is the raw data: transcript text here"));
        assert!(prompt.contains("Tone: professional"));
    }

    #[test]
    fn regenerate_prompt_carries_existing_post() {
        let post = Post::new(
            Uuid::new_v4(),
            "Old title".to_string(),
            "<p>Old content</p>".to_string(),
        );
        let prompt = regenerate_prompt(&post);

        assert!(prompt.starts_with("Improve and regenerate"));
        assert!(prompt.contains("The original Title is Old title"));
        assert!(prompt.contains("original content: <p>Old content</p>"));
    }

    #[test]
    fn edit_prompt_has_reduced_schema() {
        let prompt = edit_prompt("<p>Text</p>", "make it shorter");

        assert!(prompt.contains("EDIT: make it shorter"));
        assert!(prompt.contains("\"content\": \"result here\""));
        assert!(!prompt.contains("\"title\""));
    }

    #[test]
    fn topics_prompt_names_field_pair() {
        let prompt = topics_prompt("technology", "AI");
        assert!(prompt.contains("for technology/AI"));
        assert!(prompt.contains("\"topics\""));
    }
}
