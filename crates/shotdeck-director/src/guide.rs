//! Default shot-breakdown guideline passed to the shot-director agent.

/// Condensed Hollywood shot breakdown guideline.
pub const GUIDELINE_TEXT: &str = "\
Hollywood Shot Breakdown Guideline (condensed):
- Coverage: Establishing/master, then medium/close coverage, OTS where needed, reactions, inserts for key info.
- Continuity: Respect 180-degree line + eyelines + screen direction. Cross line only with motivated method.
- Staging: Use clear blocking. A-I-L staging patterns can guide multi-character layouts.
- Motivated camera: movement must serve story/emotion; lens choice should match emotional distance.
- Edit flow: cut on movement, match action, use inserts as bridges when needed.
";
