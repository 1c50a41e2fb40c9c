//! ASCII art standing in for the game's textures.
//!
//! Each sprite is stretched over whatever world rectangle it is drawn into;
//! spaces are transparent.

use crate::render::{Asset, CactusVariant};
use ratatui::style::Color;

pub struct SpriteArt {
    pub art: &'static str,
    pub fg: Color,
}

impl SpriteArt {
    pub const fn new(art: &'static str, fg: Color) -> Self {
        Self { art, fg }
    }

    /// Art as a grid, short lines padded with spaces to the full width.
    pub fn rows(&self) -> Vec<Vec<char>> {
        let width = self.width();
        self.art
            .lines()
            .map(|l| {
                let mut row: Vec<char> = l.chars().collect();
                row.resize(width, ' ');
                row
            })
            .collect()
    }

    pub fn width(&self) -> usize {
        self.art
            .lines()
            .map(|l| l.chars().count())
            .max()
            .unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.art.lines().count()
    }
}

// The background is drawn screen-sized, so its rows are proportional to the
// world height. The ground band sits in the lowest quarter.
pub const BACKGROUND: SpriteArt = SpriteArt::new(
    "
      .--.                   .-.
   .-(    ).               (   ).
  (___.__)_)              (__.__)

              .                   .


_.______.__________.______.______.______
  .    ,     .  ,     .       ,   .  ,
 ,  .     ,      .  ,    .  ,      .
    ,   .    ,  .     ,      .     ,  . ",
    Color::Rgb(90, 80, 70),
);

pub const DINO: SpriteArt = SpriteArt::new(
    "     ▄███▄
     █▄███
▌   ▟████▀
▀█▄▟████▙
  ▀█▀ ▀█  ",
    Color::LightYellow,
);

// Cactus sprites leave the top and sides empty: the hitbox is the lower
// middle of the sprite rectangle. The two blank bottom rows put the base on
// the dino's ground line.
pub const CACTUS_SAGUARO: SpriteArt = SpriteArt::new(
    "




    ▐█▌
 ▐▌ ▐█▌
 ▐█▄▟█▌ ▐▌
   ▝▜█▙▄█▌
    ▐█▌▀▘
    ▐█▌
    ▐█▌
    ▐█▌

          ",
    Color::Rgb(60, 140, 60),
);

pub const CACTUS_TWIN: SpriteArt = SpriteArt::new(
    "





   ▐▌
   ▐▌  ▐▌
 ▐▌▐▌  ▐▌
 ▝▙▟▌▐▌▐▌
   ▐▌▝▙▟▌
   ▐▌  ▐▌
   ▐▌  ▐▌

          ",
    Color::Rgb(50, 130, 50),
);

pub const CACTUS_CLUSTER: SpriteArt = SpriteArt::new(
    "






     ▐▌
  ▐▌ ▐▌▐▌
  ▐▙▄▟▙▟▌
 ▐▌ ▐█▌
 ▝▙▄▟█▌
    ▐█▌

          ",
    Color::Rgb(80, 150, 70),
);

pub fn sprite_for(asset: Asset) -> &'static SpriteArt {
    match asset {
        Asset::Background => &BACKGROUND,
        Asset::Dino => &DINO,
        Asset::Cactus(CactusVariant::Saguaro) => &CACTUS_SAGUARO,
        Asset::Cactus(CactusVariant::Twin) => &CACTUS_TWIN,
        Asset::Cactus(CactusVariant::Cluster) => &CACTUS_CLUSTER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_are_padded_to_width() {
        for asset in [
            Asset::Background,
            Asset::Dino,
            Asset::Cactus(CactusVariant::Saguaro),
            Asset::Cactus(CactusVariant::Twin),
            Asset::Cactus(CactusVariant::Cluster),
        ] {
            let sprite = sprite_for(asset);
            let width = sprite.width();
            assert!(width > 0, "{:?} is empty", asset);
            for row in sprite.rows() {
                assert_eq!(row.len(), width, "{:?} has a ragged row", asset);
            }
        }
    }

    #[test]
    fn test_cactus_sprites_share_shape() {
        let h = CACTUS_SAGUARO.height();
        assert_eq!(CACTUS_TWIN.height(), h);
        assert_eq!(CACTUS_CLUSTER.height(), h);
        assert_eq!(h, 15);
        assert_eq!(CACTUS_SAGUARO.width(), 10);
    }

    #[test]
    fn test_background_has_ground_band() {
        let rows = BACKGROUND.rows();
        assert_eq!(rows.len(), 12);
        assert!(rows[8].iter().filter(|&&c| c == '_').count() > 20);
    }
}
