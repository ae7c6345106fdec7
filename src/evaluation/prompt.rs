const IDEA_PLACEHOLDER: &str = "{idea}";

const PROMPT_TEMPLATE: &str = "
You are an expert startup evaluator. Analyze the following startup idea:

STARTUP IDEA:
{idea}

Please follow this structure in your response, using clear paragraphs and section titles (without asterisks or markdown):

\t1.\tBUSINESS PLAN

Begin with a detailed and data-driven business plan based on a close and accurate reading of the submitted startup idea. Carefully analyze the content, objectives, and assumptions in the user’s input before proceeding. Use this analysis to shape precise financial projections and operational strategies.

Include the following elements:
\t•\tEstimated startup costs with detailed breakdowns (e.g., technology development, legal setup, branding and marketing, staffing, licenses).
\t•\tOngoing sustainability and operational costs (e.g., server hosting, maintenance, personnel, customer support).
\t•\tEvaluation of possible revenue models (e.g., subscriptions, advertising, licensing, freemium, SaaS) with pros and cons for each in this specific context.
\t•\tA robust financial forecast including estimated revenue, expenses, and profit/loss margins for years 1, 3, and 5. Ensure these numbers are internally consistent and realistic, based on the project’s scope and industry standards.

Then outline a step-by-step roadmap:
\t•\tDefine clear strategic goals and deliverables (e.g., MVP release, beta testing, monetization).
\t•\tEstimate timelines in months or quarters for each key phase.
\t•\tAssign projected milestone dates and include cost or revenue impact when relevant.

Conclude this section by identifying and analyzing potential risks:
\t•\tConsider legal, regulatory, financial, technical, and organizational risks.
\t•\tFor each risk, describe a specific mitigation strategy.
\t•\tAddress scalability and investor concerns if applicable.

All insights should be informed directly by the original idea. Avoid assumptions that are not grounded in the source text.
\t2.\tMARKET ANALYSIS

Perform a comprehensive market analysis tailored to the submitted project idea. Do not generalize — instead, read and interpret the text thoroughly to extract relevant market implications.

Include the following:
\t•\tDefine Total Addressable Market (TAM), Serviceable Available Market (SAM), and the most realistic initial target segment based on the idea.
\t•\tIdentify demographic, geographic, and behavioral characteristics of the potential user base.
\t•\tProvide a competitive landscape analysis featuring 2 to 4 relevant competitors. Include a table comparing key aspects such as product features, pricing, UX, branding, and market positioning.
\t•\tHighlight industry trends, adoption barriers, and current market opportunities.
\t•\tInclude structured tables and hypothetical data points. When useful, suggest specific visual formats (such as pie charts, bar graphs, or timelines) to illustrate findings, and clearly describe what each graph should show. Creation of at least one visual representation (e.g., a projected revenue line chart or competitor positioning matrix) is mandatory.

\t3.\tIDEA JUDGMENT

Conclude with a strategic evaluation of the startup idea, based on the detailed readings and analysis conducted above.
\t•\tProvide a summary of the concept’s key strengths and potential limitations.
\t•\tAssess viability using clear criteria: is it realistic, scalable, fundable, competitive, and sustainable?
\t•\tIssue a final recommendation: whether to proceed as is, pivot, or pause for refinement.
\t•\tIf necessary, suggest strategic improvements, alternate monetization approaches, stronger niche targeting, or a change in core positioning to increase its chances of success.

Ensure that every part of your analysis remains consistent with the original project description. Do not make speculative leaps. Stay grounded in the actual content and intent of the user’s idea.
Write clearly and professionally. Avoid asterisks, hashtags, bold characters and markdown formatting. Instead, use paragraph spacing and capitalized section headings to organize the output.
";

/// Embeds the idea into the evaluation template. The idea is inserted once,
/// verbatim; placeholder-like text inside it is not expanded.
pub fn build_prompt(idea: &str) -> String {
    match PROMPT_TEMPLATE.split_once(IDEA_PLACEHOLDER) {
        Some((head, tail)) => {
            let mut prompt = String::with_capacity(PROMPT_TEMPLATE.len() + idea.len());
            prompt.push_str(head);
            prompt.push_str(idea);
            prompt.push_str(tail);
            prompt
        }
        None => format!("{}{}", PROMPT_TEMPLATE, idea),
    }
}
