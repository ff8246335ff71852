use super::lexer::{tokenize, Token};
use crate::errors::{DecodeError, Error};
use crate::options::ConstructorOptions;
use crate::{
    Coordinates, CoordinatesType, Geometry, GeometryCollection, LineString, MultiLineString,
    MultiPoint, MultiPolygon, Point, Polygon, Sequence,
};

pub(super) fn parse(input: &str, opts: ConstructorOptions) -> Result<Geometry, Error> {
    let tokens = tokenize(input)?;
    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
        opts,
    };
    let geometry = parser.geometry()?;
    if parser.pos != tokens.len() {
        return Err(DecodeError::Wkt("unexpected trailing input".to_string()).into());
    }
    Ok(geometry)
}

struct Parser<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    opts: ConstructorOptions,
}

impl<'a> Parser<'a> {
    fn geometry(&mut self) -> Result<Geometry, Error> {
        let tag = self.word()?.to_ascii_uppercase();
        let ctype = self.modifier()?;
        match tag.as_str() {
            "POINT" => Ok(self.point_body(ctype)?.into()),
            "LINESTRING" => Ok(self.line_string_body(ctype)?.into()),
            "POLYGON" => Ok(self.polygon_body(ctype)?.into()),
            "MULTIPOINT" => Ok(self.multi_point_body(ctype)?.into()),
            "MULTILINESTRING" => Ok(self.multi_line_string_body(ctype)?.into()),
            "MULTIPOLYGON" => Ok(self.multi_polygon_body(ctype)?.into()),
            "GEOMETRYCOLLECTION" => Ok(self.geometry_collection_body(ctype)?.into()),
            other => Err(DecodeError::Wkt(format!("unexpected keyword: {}", other)).into()),
        }
    }

    fn point_body(&mut self, ctype: CoordinatesType) -> Result<Point, Error> {
        if self.accept_empty() {
            return Ok(Point::empty(ctype));
        }
        self.expect(Token::LParen)?;
        let coords = self.position(ctype)?;
        self.expect(Token::RParen)?;
        Ok(Point::new(coords, self.opts)?)
    }

    fn line_string_body(&mut self, ctype: CoordinatesType) -> Result<LineString, Error> {
        if self.accept_empty() {
            return Ok(LineString::empty(ctype));
        }
        let seq = self.sequence_body(ctype)?;
        Ok(LineString::new(seq, self.opts)?)
    }

    fn polygon_body(&mut self, ctype: CoordinatesType) -> Result<Polygon, Error> {
        if self.accept_empty() {
            return Ok(Polygon::empty(ctype));
        }
        self.expect(Token::LParen)?;
        let mut rings = Vec::new();
        loop {
            let seq = self.sequence_body(ctype)?;
            rings.push(LineString::new(seq, self.opts)?);
            if !self.accept(Token::Comma) {
                break;
            }
        }
        self.expect(Token::RParen)?;
        Ok(Polygon::from_rings(rings, self.opts)?)
    }

    fn multi_point_body(&mut self, ctype: CoordinatesType) -> Result<MultiPoint, Error> {
        if self.accept_empty() {
            return Ok(MultiPoint::empty(ctype));
        }
        self.expect(Token::LParen)?;
        let mut points = Vec::new();
        loop {
            // Members may be bare positions, parenthesized positions, or
            // EMPTY.
            if self.accept_empty() {
                points.push(Point::empty(ctype));
            } else if self.accept(Token::LParen) {
                let coords = self.position(ctype)?;
                self.expect(Token::RParen)?;
                points.push(Point::new(coords, self.opts)?);
            } else {
                let coords = self.position(ctype)?;
                points.push(Point::new(coords, self.opts)?);
            }
            if !self.accept(Token::Comma) {
                break;
            }
        }
        self.expect(Token::RParen)?;
        Ok(MultiPoint::new(points, self.opts))
    }

    fn multi_line_string_body(&mut self, ctype: CoordinatesType) -> Result<MultiLineString, Error> {
        if self.accept_empty() {
            return Ok(MultiLineString::empty(ctype));
        }
        self.expect(Token::LParen)?;
        let mut members = Vec::new();
        loop {
            if self.accept_empty() {
                members.push(LineString::empty(ctype));
            } else {
                let seq = self.sequence_body(ctype)?;
                members.push(LineString::new(seq, self.opts)?);
            }
            if !self.accept(Token::Comma) {
                break;
            }
        }
        self.expect(Token::RParen)?;
        Ok(MultiLineString::new(members, self.opts))
    }

    fn multi_polygon_body(&mut self, ctype: CoordinatesType) -> Result<MultiPolygon, Error> {
        if self.accept_empty() {
            return Ok(MultiPolygon::empty(ctype));
        }
        self.expect(Token::LParen)?;
        let mut members = Vec::new();
        loop {
            members.push(self.polygon_body(ctype)?);
            if !self.accept(Token::Comma) {
                break;
            }
        }
        self.expect(Token::RParen)?;
        Ok(MultiPolygon::new(members, self.opts)?)
    }

    fn geometry_collection_body(
        &mut self,
        ctype: CoordinatesType,
    ) -> Result<GeometryCollection, Error> {
        if self.accept_empty() {
            return Ok(GeometryCollection::empty(ctype));
        }
        self.expect(Token::LParen)?;
        let mut members = Vec::new();
        loop {
            members.push(self.geometry()?);
            if !self.accept(Token::Comma) {
                break;
            }
        }
        self.expect(Token::RParen)?;
        Ok(GeometryCollection::new(members, self.opts))
    }

    // "( x y, x y, ... )" with the ordinate count fixed by the coordinates
    // type.
    fn sequence_body(&mut self, ctype: CoordinatesType) -> Result<Sequence, Error> {
        self.expect(Token::LParen)?;
        let mut floats = Vec::new();
        loop {
            for _ in 0..ctype.dimension() {
                floats.push(self.number()?);
            }
            if !self.accept(Token::Comma) {
                break;
            }
        }
        self.expect(Token::RParen)?;
        Ok(Sequence::new(floats, ctype).map_err(Error::from)?)
    }

    fn position(&mut self, ctype: CoordinatesType) -> Result<Coordinates, Error> {
        let x = self.number()?;
        let y = self.number()?;
        let z = if ctype.is_3d() { Some(self.number()?) } else { None };
        let m = if ctype.is_measured() {
            Some(self.number()?)
        } else {
            None
        };
        Ok(Coordinates {
            xy: crate::XY::new(x, y),
            z,
            m,
        })
    }

    // The optional Z / M / ZM between a geometry tag and its body.
    fn modifier(&mut self) -> Result<CoordinatesType, Error> {
        if let Some(Token::Word(word)) = self.tokens.get(self.pos) {
            let ctype = match word.to_ascii_uppercase().as_str() {
                "Z" => Some(CoordinatesType::XYZ),
                "M" => Some(CoordinatesType::XYM),
                "ZM" => Some(CoordinatesType::XYZM),
                _ => None,
            };
            if let Some(ctype) = ctype {
                self.pos += 1;
                return Ok(ctype);
            }
        }
        Ok(CoordinatesType::XY)
    }

    fn word(&mut self) -> Result<&'a str, DecodeError> {
        match self.tokens.get(self.pos) {
            Some(Token::Word(word)) => {
                self.pos += 1;
                Ok(word)
            }
            other => Err(unexpected("keyword", other)),
        }
    }

    fn number(&mut self) -> Result<f64, DecodeError> {
        match self.tokens.get(self.pos) {
            Some(Token::Number(value)) => {
                self.pos += 1;
                Ok(*value)
            }
            other => Err(unexpected("number", other)),
        }
    }

    fn accept_empty(&mut self) -> bool {
        if let Some(Token::Word(word)) = self.tokens.get(self.pos) {
            if word.eq_ignore_ascii_case("EMPTY") {
                self.pos += 1;
                return true;
            }
        }
        false
    }

    fn accept(&mut self, token: Token<'_>) -> bool {
        if self.tokens.get(self.pos) == Some(&token) {
            self.pos += 1;
            return true;
        }
        false
    }

    fn expect(&mut self, token: Token<'_>) -> Result<(), DecodeError> {
        if !self.accept(token.clone()) {
            return Err(unexpected(
                match token {
                    Token::LParen => "'('",
                    Token::RParen => "')'",
                    Token::Comma => "','",
                    _ => "token",
                },
                self.tokens.get(self.pos),
            ));
        }
        Ok(())
    }
}

fn unexpected(wanted: &str, found: Option<&Token<'_>>) -> DecodeError {
    match found {
        Some(token) => DecodeError::Wkt(format!("expected {} but found {:?}", wanted, token)),
        None => DecodeError::Wkt(format!("expected {} but input ended", wanted)),
    }
}
