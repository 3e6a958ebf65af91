// SPDX-License-Identifier: MIT OR Apache-2.0

//! Color constants for the teams and the taken boxes

/// Team palette as RGB 8-bit values [0-255]
pub mod team_rgb {
    pub const VERT: [u8; 3] = [34, 197, 94];
    pub const VERT_DARK: [u8; 3] = [22, 163, 74];
    pub const BLEU: [u8; 3] = [59, 130, 246];
    pub const BLEU_DARK: [u8; 3] = [37, 99, 235];
    pub const ROUGE: [u8; 3] = [239, 68, 68];
    pub const ROUGE_DARK: [u8; 3] = [220, 38, 38];
    pub const ORANGE: [u8; 3] = [249, 115, 22];
    pub const ORANGE_DARK: [u8; 3] = [234, 88, 12];
}

/// Neutral gray used for boxes that have been taken
pub mod taken_rgb {
    pub const LIGHT: [u8; 3] = [156, 163, 175]; // #9ca3af
    pub const DARK: [u8; 3] = [107, 114, 128]; // #6b7280
}

/// Blend two colors, `t` = 0.0 gives `from`, 1.0 gives `to`
pub fn linear_gradient(from: [u8; 3], to: [u8; 3], t: f32) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 * (1.0 - t) + b as f32 * t).round() as u8;
    [mix(from[0], to[0]), mix(from[1], to[1]), mix(from[2], to[2])]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_shades_are_darker() {
        let pairs = [
            (team_rgb::VERT, team_rgb::VERT_DARK),
            (team_rgb::BLEU, team_rgb::BLEU_DARK),
            (team_rgb::ROUGE, team_rgb::ROUGE_DARK),
            (team_rgb::ORANGE, team_rgb::ORANGE_DARK),
            (taken_rgb::LIGHT, taken_rgb::DARK),
        ];
        for (light, dark) in pairs {
            let sum = |c: [u8; 3]| c.iter().map(|&v| v as u32).sum::<u32>();
            assert!(sum(dark) < sum(light), "{:?} vs {:?}", light, dark);
        }
    }

    #[test]
    fn test_linear_gradient_endpoints() {
        let a = [0, 100, 200];
        let b = [200, 100, 0];
        assert_eq!(linear_gradient(a, b, 0.0), a);
        assert_eq!(linear_gradient(a, b, 1.0), b);
        assert_eq!(linear_gradient(a, b, 0.5), [100, 100, 100]);
        assert_eq!(linear_gradient(a, b, 7.0), b);
    }
}
