use crate::Result;
use libgradient::patterns::{
    checkerboard, dots, mesh, stripes, waves, DEFAULT_CHECKERBOARD_SIZE, DEFAULT_DOT_SIZE,
    DEFAULT_STRIPE_WIDTH,
};
use libgradient::{ColorStop, MeshLayer, PatternKind};

pub struct PatternArgs<'a, W: std::io::Write> {
    pub kind: PatternKind,
    /// Stops for stripes and waves; the two colors for checkerboard and dots.
    pub colors: &'a [String],
    pub angle: Option<i32>,
    /// Stripe width, checkerboard cell size or dot size, depending on the pattern.
    pub size: Option<f64>,
    pub layers: &'a [MeshLayer],
    pub stdout: &'a mut W,
}

pub fn run<W: std::io::Write>(args: PatternArgs<W>) -> Result<()> {
    let background = match args.kind {
        PatternKind::Stripes => stripes(
            &evenly_spaced(args.colors, args.kind)?,
            args.angle.unwrap_or(45),
            args.size.unwrap_or(DEFAULT_STRIPE_WIDTH),
        ),
        PatternKind::Waves => waves(
            &evenly_spaced(args.colors, args.kind)?,
            args.angle.unwrap_or(90),
        ),
        PatternKind::Checkerboard => {
            let (first, second) = color_pair(args.colors, args.kind)?;
            checkerboard(
                first,
                second,
                args.size.unwrap_or(DEFAULT_CHECKERBOARD_SIZE),
            )
        }
        PatternKind::Dots => {
            let (dot, background) = color_pair(args.colors, args.kind)?;
            dots(dot, background, args.size.unwrap_or(DEFAULT_DOT_SIZE))
        }
        PatternKind::Mesh => {
            if args.layers.is_empty() {
                return Err(crate::Error::General(
                    "A mesh needs at least one --layer COLOR@X,Y,SIZE".to_string(),
                ));
            }
            mesh(args.layers)
        }
    };

    writeln!(args.stdout, "background: {};", background)?;

    Ok(())
}

/// Spreads colors evenly from 0% to 100%, the same way unpositioned CSS stops are.
fn evenly_spaced(colors: &[String], kind: PatternKind) -> Result<Vec<ColorStop>> {
    if colors.len() < 2 {
        return Err(crate::Error::General(format!(
            "{} needs at least 2 colors, found {}",
            kind.as_str(),
            colors.len()
        )));
    }

    let step = 100. / (colors.len() - 1) as f64;

    Ok(colors
        .iter()
        .enumerate()
        .map(|(i, color)| ColorStop::new(color.as_str(), (i as f64 * step).round()))
        .collect())
}

fn color_pair(colors: &[String], kind: PatternKind) -> Result<(&str, &str)> {
    match colors {
        [first, second] => Ok((first.as_str(), second.as_str())),
        _ => Err(crate::Error::General(format!(
            "{} needs exactly 2 colors, found {}",
            kind.as_str(),
            colors.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pattern(kind: PatternKind, colors: &[&str], size: Option<f64>) -> Result<String> {
        let colors: Vec<String> = colors.iter().map(|c| c.to_string()).collect();
        let mut stdout = std::io::Cursor::new(Vec::new());

        run(PatternArgs {
            kind,
            colors: &colors,
            angle: None,
            size,
            layers: &[],
            stdout: &mut stdout,
        })?;

        Ok(String::from_utf8(stdout.into_inner()).unwrap())
    }

    #[test]
    fn stripes_default_to_forty_five_degrees() {
        assert_eq!(
            pattern(PatternKind::Stripes, &["red", "blue"], Some(10.)).unwrap(),
            "background: repeating-linear-gradient(45deg, \
             red 0%, red 10%, blue 10%, blue 100%);\n"
        );
    }

    #[test]
    fn waves_spread_their_colors() {
        assert_eq!(
            pattern(PatternKind::Waves, &["red", "green", "blue"], None).unwrap(),
            "background: linear-gradient(90deg, red 0%, green 50%, blue 100%);\n"
        );
    }

    #[test]
    fn dots_use_the_default_size() {
        assert_eq!(
            pattern(PatternKind::Dots, &["black", "white"], None).unwrap(),
            "background: radial-gradient(circle at center, black 10%, white 10%);\n"
        );
    }

    #[test]
    fn checkerboard_needs_two_colors() {
        assert!(pattern(PatternKind::Checkerboard, &["black"], None).is_err());
        assert!(pattern(PatternKind::Checkerboard, &["black", "white"], None)
            .unwrap()
            .contains("0 0 / 20px 20px"));
    }

    #[test]
    fn mesh_layers_in_order() {
        let layers = vec![
            "#FF416C@20,30,50".parse::<MeshLayer>().unwrap(),
            "#2193b0@80,70,40".parse::<MeshLayer>().unwrap(),
        ];
        let mut stdout = std::io::Cursor::new(Vec::new());

        run(PatternArgs {
            kind: PatternKind::Mesh,
            colors: &[],
            angle: None,
            size: None,
            layers: &layers,
            stdout: &mut stdout,
        })
        .unwrap();

        assert_eq!(
            String::from_utf8(stdout.into_inner()).unwrap(),
            "background: radial-gradient(circle at 20% 30%, #FF416C, transparent 50%), \
             radial-gradient(circle at 80% 70%, #2193b0, transparent 40%);\n"
        );
    }

    #[test]
    fn mesh_without_layers_is_an_error() {
        assert!(pattern(PatternKind::Mesh, &[], None).is_err());
    }
}
