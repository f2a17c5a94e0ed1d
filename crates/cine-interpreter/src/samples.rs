//! Built-in demo commands.

/// Sample commands exercising most of the vocabulary, used by demo surfaces.
pub const SAMPLE_COMMANDS: &[&str] = &[
    "Create exterior rainy street scene, follow actor with 35mm lens, low angle, noir mood",
    "Interior coffee shop, golden hour light through windows, medium shot, romantic atmosphere",
    "Dramatic close-up, high contrast lighting, 85mm lens, static, tense dialogue scene",
    "Wide establishing shot, desert landscape, drone aerial, dawn, epic cinematic style",
    "Handheld medium shot, documentary style, natural lighting, interior office",
    "Dutch angle close-up, neon lighting, cyberpunk mood, 24mm wide lens",
];
